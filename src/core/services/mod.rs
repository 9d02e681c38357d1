pub mod activation_service;
pub mod profile_resolver;
pub mod profile_service;
pub mod profile_store;
