pub mod cli;
pub mod command;
pub mod config;
pub mod convention;
pub mod error;
pub mod prompt;
pub mod result;

pub use convention::{AzureDevopsConventional, CommitConvention};
pub use error::{CzError, Result};
