//! Bundling infrastructure for the noir stylesheet.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! This crate provides:
//! - Recursive `@import` resolution into a single flat CSS source
//! - A transform/minify engine abstraction with a lightningcss-backed
//!   implementation (browser targets, error recovery, source maps)
//! - Artifact writing and a pure size/reduction report
//!
//! The build is a single linear pipeline: resolve → transform (twice:
//! unminified, then minified + source map) → write artifacts.

mod artifacts;
mod build;
mod error;
mod report;
mod resolver;
mod transform;

pub use artifacts::{BUNDLE_FILE, BuildArtifacts, MAP_FILE, MIN_FILE, write_artifacts};
pub use build::{BuildOptions, BuildOutcome, run_build};
pub use error::BundleError;
pub use report::BuildReport;
pub use resolver::{ResolvedCss, UnresolvedImport, resolve_imports};
pub use transform::{
    CssTransformer, DEFAULT_BROWSERS, LightningTransformer, TransformOptions, TransformOutput,
};
