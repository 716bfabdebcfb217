//! HTML extraction of dealer listings from a locator response fragment.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::types::DealerRecord;

/// Placeholder text the endpoint renders inside an `li.item` when a search
/// point has no dealers in range.
const NO_DEALER_SENTINEL: &str = "No Dealer Found";

/// Address fragments starting with these are phone/fax/email labels.
const CONTACT_LABEL_PREFIXES: [&str; 3] = ["P:", "F:", "E:"];

static ITEM: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("li.item").expect("valid selector"));
static HEAD: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.dealers-head").expect("valid selector"));
static HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h4").expect("valid selector"));
static DETAILS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.dealers-details").expect("valid selector"));
static PARAGRAPH: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("valid selector"));
static ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("valid selector"));

/// Why a single listing node produced no record.
#[derive(Debug, thiserror::Error)]
pub(crate) enum NodeError {
    #[error("listing has no dealers-head block")]
    MissingHead,
    #[error("listing head has no h4 heading")]
    MissingHeading,
    #[error("listing heading is empty")]
    EmptyName,
}

/// Extract every dealer listing from a locator response body.
///
/// Nodes carrying the "No Dealer Found" placeholder are skipped, as is any
/// node without a usable name. Output follows document order.
#[must_use]
pub fn extract_dealers(html: &str) -> Vec<DealerRecord> {
    let document = Html::parse_fragment(html);
    let mut dealers = Vec::new();

    for (index, item) in document.select(&ITEM).enumerate() {
        if is_placeholder(&item) {
            tracing::debug!(index, "skipping no-dealer placeholder");
            continue;
        }

        match parse_dealer_node(&item) {
            Ok(dealer) => {
                tracing::info!(name = %dealer.name, "found dealer");
                dealers.push(dealer);
            }
            Err(err) => {
                tracing::debug!(index, error = %err, "skipping dealer listing");
            }
        }
    }

    dealers
}

fn is_placeholder(item: &ElementRef<'_>) -> bool {
    item.text().collect::<String>().contains(NO_DEALER_SENTINEL)
}

fn parse_dealer_node(item: &ElementRef<'_>) -> Result<DealerRecord, NodeError> {
    let name = dealer_name(item)?;

    let Some(details) = item.select(&DETAILS).next() else {
        return Ok(DealerRecord {
            name,
            address: String::new(),
            website: String::new(),
            email: String::new(),
        });
    };

    let website = first_href(&details, |href| href.starts_with("http") || href.starts_with("www"))
        .unwrap_or_default();

    let email = first_href(&details, |href| href.starts_with("mailto:"))
        .and_then(|href| href.strip_prefix("mailto:").map(str::to_string))
        .unwrap_or_default();

    Ok(DealerRecord {
        name,
        address: dealer_address(&details),
        website,
        email,
    })
}

/// Text of the first `h4` in the first `div.dealers-head`, with each text
/// fragment trimmed and the fragments concatenated.
fn dealer_name(item: &ElementRef<'_>) -> Result<String, NodeError> {
    let head = item.select(&HEAD).next().ok_or(NodeError::MissingHead)?;
    let heading = head.select(&HEADING).next().ok_or(NodeError::MissingHeading)?;

    let name: String = heading.text().map(str::trim).collect();
    if name.is_empty() {
        return Err(NodeError::EmptyName);
    }
    Ok(name)
}

/// Address from the first paragraph of the details block, minus contact lines.
fn dealer_address(details: &ElementRef<'_>) -> String {
    let Some(paragraph) = details.select(&PARAGRAPH).next() else {
        return String::new();
    };

    normalize_address_segments(paragraph.text())
}

fn normalize_address_segments<'a>(segments: impl Iterator<Item = &'a str>) -> String {
    segments
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .filter(|segment| {
            !CONTACT_LABEL_PREFIXES
                .iter()
                .any(|prefix| segment.starts_with(prefix))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn first_href(details: &ElementRef<'_>, accept: impl Fn(&str) -> bool) -> Option<String> {
    details
        .select(&ANCHOR)
        .filter_map(|anchor| anchor.value().attr("href"))
        .find(|href| accept(*href))
        .map(str::to_string)
}
