//! Region collection orchestration.

use std::path::Path;
use std::time::Duration;

use dealerscan_core::RegionConfig;

use crate::error::SinkError;
use crate::locator::{aggregate, DealerLocatorClient};
use crate::sink::{write_dealers_csv, SinkOutcome};

/// Counters reported at the end of a region run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSummary {
    pub points_searched: usize,
    pub points_failed: usize,
    pub points_empty: usize,
    /// Records extracted across all points, before deduplication.
    pub records_extracted: usize,
    pub unique_dealers: usize,
    pub sink: SinkOutcome,
}

/// Search every point of `region` in order, deduplicate, and write the CSV.
///
/// Points are queried one at a time with `pause` between consecutive
/// requests. A failed point is logged and contributes no records; it never
/// stops the run. When no dealer is found anywhere, `output` is left alone.
///
/// # Errors
///
/// Returns [`SinkError`] only if the final CSV cannot be written.
pub async fn collect_region(
    client: &DealerLocatorClient,
    region: &RegionConfig,
    output: &Path,
    pause: Duration,
) -> Result<CollectionSummary, SinkError> {
    let total = region.points.len();
    let mut per_point = Vec::with_capacity(total);
    let mut points_failed = 0;
    let mut points_empty = 0;

    for (index, point) in region.points.iter().enumerate() {
        tracing::info!(
            region = %region.name,
            postal_code = %point.postal_code,
            location = %point.display_name(),
            "searching dealers near"
        );

        let outcome = client.search_point(point, &region.country).await;
        if outcome.is_failed() {
            points_failed += 1;
        } else {
            let records = outcome.into_records();
            if records.is_empty() {
                points_empty += 1;
            } else {
                per_point.push(records);
            }
        }

        if index + 1 < total && !pause.is_zero() {
            tokio::time::sleep(pause).await;
        }
    }

    let records_extracted = per_point.iter().map(Vec::len).sum();
    let unique = aggregate(per_point);

    tracing::info!(
        region = %region.name,
        points = total,
        failed = points_failed,
        records = records_extracted,
        unique = unique.len(),
        "region search complete"
    );

    let sink = write_dealers_csv(&unique, output)?;

    Ok(CollectionSummary {
        points_searched: total,
        points_failed,
        points_empty,
        records_extracted,
        unique_dealers: unique.len(),
        sink,
    })
}
