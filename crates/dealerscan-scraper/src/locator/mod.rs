//! Dealer locator crawler.
//!
//! Queries the locator's form endpoint once per search point, extracts the
//! `li.item` dealer listings from each HTML response, and merges the results
//! across points with first-seen-wins deduplication.

mod client;
mod dedupe;
mod extract;
pub mod types;

pub use client::DealerLocatorClient;
pub use dedupe::{aggregate, dealer_key};
pub use extract::extract_dealers;
pub use types::{DealerRecord, PointOutcome};
