use thiserror::Error;

/// Errors from a single locator request.
#[derive(Debug, Error)]
pub enum LocatorError {
    #[error("HTTP error querying dealer locator: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },
}

/// Errors while writing the dealer CSV.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error writing {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("failed to create temporary file in {path}: {source}")]
    TempFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to flush {path}: {source}")]
    Flush {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to move finished CSV into place at {path}: {source}")]
    Persist {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
