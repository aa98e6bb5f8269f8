pub mod catalog;
pub mod error;
pub mod prompt;
pub mod store;
pub mod types;
