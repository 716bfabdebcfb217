use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read region file {path}: {source}")]
    RegionFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse region file {path}: {source}")]
    RegionFileParse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("region validation failed: {0}")]
    Validation(String),
}
