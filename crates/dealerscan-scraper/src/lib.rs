pub mod error;
pub mod locator;
pub mod pipeline;
pub mod sink;

pub use error::{LocatorError, SinkError};
pub use locator::{
    aggregate, dealer_key, extract_dealers, DealerLocatorClient, DealerRecord, PointOutcome,
};
pub use pipeline::{collect_region, CollectionSummary};
pub use sink::{write_dealers_csv, SinkOutcome};
