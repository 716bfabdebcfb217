//! `collect` command handler.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use dealerscan_core::{load_region, resolve_region_path, AppConfig, RegionConfig};
use dealerscan_scraper::{collect_region, CollectionSummary, DealerLocatorClient, SinkOutcome};

/// Run one region end to end and print a summary line.
///
/// When `dry_run` is `true` the resolved points are printed and no request
/// is sent.
///
/// # Errors
///
/// Returns an error if the region file cannot be loaded, the HTTP client
/// cannot be built, or the CSV cannot be written. Per-point failures are
/// logged and counted, not propagated.
pub(crate) async fn run_collect(
    config: &AppConfig,
    region_ref: &str,
    output_override: Option<&Path>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let region_path = resolve_region_path(region_ref, &config.regions_dir);
    let region = load_region(&region_path)
        .with_context(|| format!("failed to load region '{region_ref}'"))?;
    let output = output_override.map_or_else(|| region.output.clone(), Path::to_path_buf);

    if dry_run {
        print!("{}", format_dry_run(&region, &output));
        return Ok(());
    }

    let client = DealerLocatorClient::from_config(config)?;
    tracing::info!(
        region = %region.name,
        endpoint = client.endpoint_url(),
        points = region.points.len(),
        "starting dealer collection"
    );

    let summary = collect_region(
        &client,
        &region,
        &output,
        Duration::from_millis(config.inter_request_delay_ms),
    )
    .await
    .with_context(|| format!("failed to save dealers for region '{}'", region.name))?;

    println!("{}", format_summary(&region.name, &summary));
    Ok(())
}

pub(crate) fn format_dry_run(region: &RegionConfig, output: &Path) -> String {
    let mut text = format!(
        "dry-run: would search {} point(s) in {} ({}), writing {}\n",
        region.points.len(),
        region.name,
        region.country,
        output.display()
    );
    for point in &region.points {
        text.push_str(&format!(
            "  {} lat={} lng={} radius={}\n",
            point.display_name(),
            point.latitude,
            point.longitude,
            point.radius
        ));
    }
    text
}

pub(crate) fn format_summary(region: &str, summary: &CollectionSummary) -> String {
    let destination = match &summary.sink {
        SinkOutcome::Written { path, .. } => format!("written to {}", path.display()),
        SinkOutcome::Skipped => "nothing written".to_string(),
    };
    format!(
        "{region}: searched {} point(s), {} failed, {} record(s) extracted, {} unique dealer(s) {destination}",
        summary.points_searched,
        summary.points_failed,
        summary.records_extracted,
        summary.unique_dealers,
    )
}
