//! Command implementations for the Noir CLI
//!
//! Each command module handles the CLI interface and delegates to
//! noir-bundler for actual implementation.

pub mod build;
