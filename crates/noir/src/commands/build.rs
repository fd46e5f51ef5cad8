//! The `noir build` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use noir_bundler::{BuildOptions, LightningTransformer, run_build};

/// Run the build pipeline and print the size report (plain or JSON).
///
/// Unresolved imports are warnings on stderr; the build still succeeds and
/// the process exits zero. Fatal conditions (missing entry, invalid browser
/// query, engine failure, import cycle) bubble up as errors and exit
/// non-zero with nothing written.
pub fn execute(entry: PathBuf, dist: PathBuf, browsers: &str, json: bool, quiet: bool) -> Result<()> {
    let transformer =
        LightningTransformer::new(browsers).context("failed to resolve browser targets")?;

    let options = BuildOptions {
        entry,
        dist: dist.clone(),
    };
    let outcome = run_build(&options, &transformer)
        .with_context(|| format!("failed to build {}", options.entry.display()))?;

    for import in &outcome.unresolved {
        eprintln!(
            "warning: could not resolve @import \"{}\" (from {})",
            import.spec,
            import.importer.display()
        );
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.report)?);
    } else if !quiet {
        println!("{}", outcome.report.render(&dist));
    }

    Ok(())
}
