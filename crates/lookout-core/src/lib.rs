//! Error handling and configuration for the Lookout reviewer.
//!
//! This crate provides the shared foundation used by the pipeline crate
//! and the binary:
//! - [`LookoutError`] — unified error type using `thiserror`
//! - [`ReviewStandards`] — review standards loaded from `review_standards.json`
//! - [`PromptTemplates`] — prompt templates loaded from `prompts.json`

mod config;
mod error;

pub use config::{PromptTemplates, ReviewStandards, CONFIG_DIR, DEFAULT_MODEL};
pub use error::LookoutError;

/// A convenience `Result` type for Lookout operations.
pub type Result<T> = std::result::Result<T, LookoutError>;
