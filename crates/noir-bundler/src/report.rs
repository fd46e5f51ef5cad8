//! Size statistics for a completed build.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! The report is a pure value; deciding whether and where to print it is left
//! to the outermost entry point.

use std::path::Path;

use serde::Serialize;

use crate::artifacts::{BUNDLE_FILE, MAP_FILE, MIN_FILE};

/// Byte sizes of the written artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Unminified bundle size
    pub full_bytes: usize,
    /// Minified bundle size
    pub minified_bytes: usize,
    /// Source map size, if one was written
    pub map_bytes: Option<usize>,
}

impl BuildReport {
    /// Size reduction of the minified bundle relative to the unminified one,
    /// as a percentage.
    pub fn reduction_percent(&self) -> f64 {
        if self.full_bytes == 0 {
            return 0.0;
        }
        (1.0 - self.minified_bytes as f64 / self.full_bytes as f64) * 100.0
    }

    /// Render the console summary, one line per artifact, sizes in KB and the
    /// reduction percentage to one decimal place.
    pub fn render(&self, dist: &Path) -> String {
        let mut lines = vec![
            format!(
                "{}  {:.1} KB",
                dist.join(BUNDLE_FILE).display(),
                kb(self.full_bytes)
            ),
            format!(
                "{}  {:.1} KB ({:.1}% smaller)",
                dist.join(MIN_FILE).display(),
                kb(self.minified_bytes),
                self.reduction_percent()
            ),
        ];
        if let Some(map_bytes) = self.map_bytes {
            lines.push(format!(
                "{}  {:.1} KB",
                dist.join(MAP_FILE).display(),
                kb(map_bytes)
            ));
        }
        lines.join("\n")
    }
}

fn kb(bytes: usize) -> f64 {
    bytes as f64 / 1024.0
}
