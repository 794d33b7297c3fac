// Core modules
pub mod catalog;
pub mod config;
pub mod error;
pub mod generate;
pub mod record;
pub mod sop;
pub mod store;
pub mod template;

// Re-export commonly used types
pub use error::{Result, SoplabError};
