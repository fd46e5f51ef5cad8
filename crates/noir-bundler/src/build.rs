//! Build orchestration: resolve → transform → write.
//!
//! Copyright (c) 2025 Posit, PBC

use std::path::PathBuf;

use crate::artifacts::{BuildArtifacts, write_artifacts};
use crate::error::BundleError;
use crate::report::BuildReport;
use crate::resolver::{UnresolvedImport, resolve_imports};
use crate::transform::{CssTransformer, TransformOptions};

/// Inputs of one build invocation.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Entry stylesheet
    pub entry: PathBuf,
    /// Distribution directory for the three artifacts
    pub dist: PathBuf,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            entry: PathBuf::from("css/noir.css"),
            dist: PathBuf::from("dist"),
        }
    }
}

/// Result of a completed build.
#[derive(Debug)]
pub struct BuildOutcome {
    /// Size statistics of the written artifacts
    pub report: BuildReport,
    /// Imports whose targets were missing (warnings, not failures)
    pub unresolved: Vec<UnresolvedImport>,
}

/// Run the whole pipeline: flatten the entry stylesheet, transform it twice
/// (unminified, then minified with a source map, both with identical targets
/// and per-rule error recovery), and write the artifacts into `options.dist`.
///
/// Missing import targets are reported in the outcome rather than failing the
/// build; everything else in [`BundleError`] is fatal and nothing is written.
pub fn run_build(
    options: &BuildOptions,
    transformer: &dyn CssTransformer,
) -> Result<BuildOutcome, BundleError> {
    let resolved = resolve_imports(&options.entry)?;

    let filename = options
        .entry
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "noir.css".to_string());

    let full = transformer.transform(
        &filename,
        &resolved.css,
        &TransformOptions {
            minify: false,
            source_map: false,
            error_recovery: true,
        },
    )?;

    let min = transformer.transform(
        &filename,
        &resolved.css,
        &TransformOptions {
            minify: true,
            source_map: true,
            error_recovery: true,
        },
    )?;

    let artifacts = BuildArtifacts {
        full: full.code,
        minified: min.code,
        map: min.map,
    };
    write_artifacts(&options.dist, &artifacts)?;

    Ok(BuildOutcome {
        report: artifacts.report(),
        unresolved: resolved.unresolved,
    })
}
