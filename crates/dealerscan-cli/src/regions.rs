//! `regions` command handler.

use std::path::Path;

use anyhow::Context;
use dealerscan_core::regions::discover_region_files;
use dealerscan_core::{load_region, resolve_region_path, AppConfig, RegionConfig};

/// Validate and print one region, or every region file in the regions directory.
///
/// Invalid files are reported and the command fails after listing the rest.
pub(crate) fn run_regions(config: &AppConfig, region_ref: Option<&str>) -> anyhow::Result<()> {
    if let Some(reference) = region_ref {
        let path = resolve_region_path(reference, &config.regions_dir);
        let region = load_region(&path)
            .with_context(|| format!("failed to load region '{reference}'"))?;
        println!("{}", format_region_line(&path, &region));
        return Ok(());
    }

    let files = discover_region_files(&config.regions_dir)?;
    if files.is_empty() {
        anyhow::bail!("no region files found in {}", config.regions_dir.display());
    }

    let mut invalid = 0usize;
    for path in &files {
        match load_region(path) {
            Ok(region) => println!("{}", format_region_line(path, &region)),
            Err(e) => {
                invalid += 1;
                tracing::warn!(path = %path.display(), error = %e, "invalid region file");
                println!("{}: invalid ({e})", path.display());
            }
        }
    }

    if invalid > 0 {
        anyhow::bail!("{invalid} of {} region file(s) failed validation", files.len());
    }
    Ok(())
}

pub(crate) fn format_region_line(path: &Path, region: &RegionConfig) -> String {
    format!(
        "{} [{}] {} point(s) -> {} ({})",
        region.name,
        region.country,
        region.points.len(),
        region.output.display(),
        path.display()
    )
}
