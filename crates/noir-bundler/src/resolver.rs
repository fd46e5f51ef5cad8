//! Recursive `@import` resolution.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! This module flattens a stylesheet by replacing each `@import "path";`
//! directive with the contents of the target file, recursing into the
//! target's own imports. The result is one flat CSS string with no
//! resolvable imports left in it.
//!
//! Only the plain quoted form is recognized:
//!
//! ```text
//! @import "modules/base.css";
//! @import 'modules/base.css';
//! ```
//!
//! Media-qualified imports (`@import "print.css" print;`) and the
//! `@import url(...)` form are deliberately NOT matched and pass through
//! untouched. Matching is a single regex rather than a CSS tokenizer; the
//! trade-off is simplicity over grammar coverage, and the unsupported forms
//! above are the extent of the gap.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::BundleError;

/// Regex for `@import "path";` / `@import 'path';`.
///
/// The quoted string must be immediately followed (modulo whitespace) by the
/// terminating semicolon, which is what excludes media-qualified imports.
static IMPORT_DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"@import\s+["']([^"']+)["']\s*;"#).unwrap());

/// An `@import` whose target file does not exist.
///
/// The directive is left verbatim in the flattened output; this record is
/// what callers surface as a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedImport {
    /// The path as written in the directive
    pub spec: String,
    /// The file containing the directive
    pub importer: PathBuf,
}

/// Result of flattening an entry stylesheet.
#[derive(Debug, Clone)]
pub struct ResolvedCss {
    /// The fully flattened source
    pub css: String,
    /// Imports whose targets were missing, in encounter order
    pub unresolved: Vec<UnresolvedImport>,
}

/// Flatten `entry` by recursively inlining its `@import` directives.
///
/// Imports are expanded depth-first, in the textual order they appear in each
/// file, with paths resolved relative to the importing file's directory.
/// There is no memoization: a file imported by two different ancestors is
/// re-read and re-expanded each time, so duplicate imports produce duplicate
/// inlined content.
///
/// # Errors
///
/// - [`BundleError::EntryNotFound`] if `entry` does not exist. Missing import
///   targets below the entry are NOT errors: the directive stays verbatim and
///   an [`UnresolvedImport`] is recorded.
/// - [`BundleError::ImportCycle`] if a file is imported while it is still
///   being expanded (A imports B imports A).
pub fn resolve_imports(entry: &Path) -> Result<ResolvedCss, BundleError> {
    if !entry.is_file() {
        return Err(BundleError::EntryNotFound {
            path: entry.to_path_buf(),
        });
    }

    let mut unresolved = Vec::new();
    let mut in_progress: Vec<PathBuf> = Vec::new();
    let css = expand_file(entry, &mut in_progress, &mut unresolved)?;

    Ok(ResolvedCss { css, unresolved })
}

/// Expand one file, recursing into its imports.
///
/// `in_progress` holds the canonical paths currently on the resolution stack;
/// a path reappearing there is an import cycle and fails fast rather than
/// recursing until a resource limit is hit.
fn expand_file(
    path: &Path,
    in_progress: &mut Vec<PathBuf>,
    unresolved: &mut Vec<UnresolvedImport>,
) -> Result<String, BundleError> {
    let canonical = path.canonicalize()?;
    if in_progress.contains(&canonical) {
        let chain = in_progress
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        return Err(BundleError::ImportCycle {
            path: canonical,
            chain,
        });
    }
    in_progress.push(canonical);

    let result = expand_content(path, in_progress, unresolved);

    in_progress.pop();
    result
}

fn expand_content(
    path: &Path,
    in_progress: &mut Vec<PathBuf>,
    unresolved: &mut Vec<UnresolvedImport>,
) -> Result<String, BundleError> {
    let content = fs::read_to_string(path)?;
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut out = String::with_capacity(content.len());
    let mut last_end = 0;

    for captures in IMPORT_DIRECTIVE.captures_iter(&content) {
        let directive = captures.get(0).unwrap();
        let spec = captures.get(1).unwrap().as_str();
        let target = dir.join(spec);

        out.push_str(&content[last_end..directive.start()]);

        if target.is_file() {
            tracing::debug!(target_file = %target.display(), "inlining import");
            out.push_str(&expand_file(&target, in_progress, unresolved)?);
        } else {
            // Non-fatal: leave the directive in place and report it
            tracing::warn!(
                import = spec,
                importer = %path.display(),
                "import target not found, leaving directive in place"
            );
            unresolved.push(UnresolvedImport {
                spec: spec.to_string(),
                importer: path.to_path_buf(),
            });
            out.push_str(directive.as_str());
        }

        last_end = directive.end();
    }

    out.push_str(&content[last_end..]);
    Ok(out)
}
