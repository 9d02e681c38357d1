pub mod profile_yaml_parser;
