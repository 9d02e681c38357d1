pub mod git;
pub mod parsers;
pub mod stores;
