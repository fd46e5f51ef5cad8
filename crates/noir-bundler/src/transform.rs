//! CSS transform/minify engine abstraction.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! The engine is an injected capability: a function from source + options to
//! transformed text, behind the [`CssTransformer`] trait. This keeps the
//! resolver and artifact writer testable with a substitute engine.
//!
//! The concrete implementation is [`LightningTransformer`], backed by the
//! lightningcss crate: browser-target-aware lowering, optional minification,
//! optional source-map generation, and per-rule error recovery. Browser
//! targets are resolved once from a browserslist query at construction time
//! and shared by every transform pass, so the unminified and minified outputs
//! always see identical targets.

use lightningcss::printer::PrinterOptions;
use lightningcss::stylesheet::{MinifyOptions, ParserOptions, StyleSheet};
use lightningcss::targets::{Browsers, Targets};
use parcel_sourcemap::SourceMap;

use crate::error::BundleError;

/// Default browser-support query used by the build.
pub const DEFAULT_BROWSERS: &str = ">= 0.5%, last 2 versions, not dead";

/// Per-pass transform configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
    /// Produce minified output
    pub minify: bool,
    /// Produce a source map alongside the output
    pub source_map: bool,
    /// Skip malformed rules instead of aborting the whole transform
    pub error_recovery: bool,
}

/// Output of one transform pass.
#[derive(Debug, Clone)]
pub struct TransformOutput {
    /// The transformed CSS text
    pub code: String,
    /// Source map JSON, present only when requested and produced
    pub map: Option<String>,
}

/// A CSS transform/minify engine.
pub trait CssTransformer {
    /// Transform `source` according to `options`.
    ///
    /// `filename` is informational: it names the source in diagnostics and in
    /// the generated source map.
    fn transform(
        &self,
        filename: &str,
        source: &str,
        options: &TransformOptions,
    ) -> Result<TransformOutput, BundleError>;
}

/// lightningcss-backed transformer with resolved browser targets.
#[derive(Debug)]
pub struct LightningTransformer {
    targets: Targets,
}

impl LightningTransformer {
    /// Resolve `query` (a browserslist expression such as
    /// `">= 0.5%, last 2 versions, not dead"`) into browser targets.
    ///
    /// This is the single fatal precondition of the pipeline: if the query
    /// cannot be resolved, no transformer exists and the build aborts before
    /// writing anything.
    pub fn new(query: &str) -> Result<Self, BundleError> {
        let browsers =
            Browsers::from_browserslist([query]).map_err(|e| BundleError::BrowserQuery {
                query: query.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            targets: Targets {
                browsers,
                ..Targets::default()
            },
        })
    }
}

impl CssTransformer for LightningTransformer {
    fn transform(
        &self,
        filename: &str,
        source: &str,
        options: &TransformOptions,
    ) -> Result<TransformOutput, BundleError> {
        let mut stylesheet = StyleSheet::parse(
            source,
            ParserOptions {
                filename: filename.to_string(),
                error_recovery: options.error_recovery,
                ..ParserOptions::default()
            },
        )
        .map_err(|e| BundleError::Transform {
            message: e.to_string(),
        })?;

        stylesheet
            .minify(MinifyOptions {
                targets: self.targets.clone(),
                ..MinifyOptions::default()
            })
            .map_err(|e| BundleError::Transform {
                message: e.to_string(),
            })?;

        let mut source_map = options.source_map.then(|| SourceMap::new("/"));

        let result = stylesheet
            .to_css(PrinterOptions {
                minify: options.minify,
                source_map: source_map.as_mut(),
                targets: self.targets.clone(),
                ..PrinterOptions::default()
            })
            .map_err(|e| BundleError::Transform {
                message: e.to_string(),
            })?;

        let map = match source_map {
            Some(mut map) => {
                map.add_source(filename);
                map.set_source_content(0, source)
                    .map_err(|e| BundleError::Transform {
                        message: e.to_string(),
                    })?;
                Some(map.to_json(None).map_err(|e| BundleError::Transform {
                    message: e.to_string(),
                })?)
            }
            None => None,
        };

        Ok(TransformOutput {
            code: result.code,
            map,
        })
    }
}
