//! Error types for bundling operations.
//!
//! Copyright (c) 2025 Posit, PBC

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while bundling the stylesheet
#[derive(Debug, Error)]
pub enum BundleError {
    /// The entry stylesheet does not exist
    #[error("entry stylesheet not found: {}", .path.display())]
    EntryNotFound { path: PathBuf },

    /// An import chain re-entered a file that is still being expanded
    #[error("import cycle detected: {} is imported while still being expanded ({chain})", .path.display())]
    ImportCycle { path: PathBuf, chain: String },

    /// The browser-target query could not be resolved
    #[error("invalid browser target query {query:?}: {message}")]
    BrowserQuery { query: String, message: String },

    /// The CSS transform engine rejected the source
    #[error("CSS transform failed: {message}")]
    Transform { message: String },

    /// File I/O error
    #[error("failed to read or write CSS file: {0}")]
    Io(#[from] std::io::Error),
}
