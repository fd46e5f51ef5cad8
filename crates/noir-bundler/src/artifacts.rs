//! Artifact writing for the distribution directory.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! Every build fully overwrites the previous outputs. Writes are plain
//! `fs::write` calls with no atomic rename: each file is individually either
//! fully written or absent, but there is no transactional guarantee across
//! the three of them.

use std::fs;
use std::path::Path;

use crate::error::BundleError;
use crate::report::BuildReport;

/// Unminified bundle file name
pub const BUNDLE_FILE: &str = "noir.css";
/// Minified bundle file name
pub const MIN_FILE: &str = "noir.min.css";
/// Source map file name for the minified bundle
pub const MAP_FILE: &str = "noir.min.css.map";

/// The three output byte buffers of one build.
#[derive(Debug, Clone)]
pub struct BuildArtifacts {
    /// Browser-target-aware but unminified CSS
    pub full: String,
    /// Minified CSS
    pub minified: String,
    /// Source map for the minified CSS, if the minify pass produced one
    pub map: Option<String>,
}

impl BuildArtifacts {
    /// Size statistics for these artifacts.
    pub fn report(&self) -> BuildReport {
        BuildReport {
            full_bytes: self.full.len(),
            minified_bytes: self.minified.len(),
            map_bytes: self.map.as_ref().map(String::len),
        }
    }
}

/// Write the artifacts into `dist`, creating the directory (and parents)
/// if absent.
///
/// Writes `noir.css`, `noir.min.css`, and `noir.min.css.map` (the last only
/// when a map is present), unconditionally overwriting prior outputs.
pub fn write_artifacts(dist: &Path, artifacts: &BuildArtifacts) -> Result<(), BundleError> {
    fs::create_dir_all(dist)?;

    fs::write(dist.join(BUNDLE_FILE), &artifacts.full)?;
    fs::write(dist.join(MIN_FILE), &artifacts.minified)?;
    if let Some(map) = &artifacts.map {
        fs::write(dist.join(MAP_FILE), map)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_dist_and_writes_three_files() {
        let dir = TempDir::new().unwrap();
        let dist = dir.path().join("nested").join("dist");

        let artifacts = BuildArtifacts {
            full: "body { color: red }".to_string(),
            minified: "body{color:red}".to_string(),
            map: Some("{\"version\":3,\"mappings\":\"\"}".to_string()),
        };

        write_artifacts(&dist, &artifacts).unwrap();
        assert!(dist.join(BUNDLE_FILE).is_file());
        assert!(dist.join(MIN_FILE).is_file());
        assert!(dist.join(MAP_FILE).is_file());
    }

    #[test]
    fn test_map_omitted_when_absent() {
        let dir = TempDir::new().unwrap();
        let dist = dir.path().to_path_buf();

        let artifacts = BuildArtifacts {
            full: "a{}".to_string(),
            minified: "a{}".to_string(),
            map: None,
        };

        write_artifacts(&dist, &artifacts).unwrap();
        assert!(dist.join(BUNDLE_FILE).is_file());
        assert!(!dist.join(MAP_FILE).exists());
    }

    #[test]
    fn test_rerun_overwrites() {
        let dir = TempDir::new().unwrap();
        let dist = dir.path().to_path_buf();

        let first = BuildArtifacts {
            full: "old".to_string(),
            minified: "old".to_string(),
            map: None,
        };
        let second = BuildArtifacts {
            full: "new".to_string(),
            minified: "new".to_string(),
            map: None,
        };

        write_artifacts(&dist, &first).unwrap();
        write_artifacts(&dist, &second).unwrap();
        assert_eq!(fs::read_to_string(dist.join(BUNDLE_FILE)).unwrap(), "new");
    }
}
