pub mod identity_provider;
pub mod parser;
pub mod profile_storage;
