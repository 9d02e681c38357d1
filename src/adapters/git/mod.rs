pub mod git_cli;
