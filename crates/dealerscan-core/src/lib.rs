mod app_config;
mod config;
mod error;
pub mod regions;

pub use app_config::{AppConfig, DEFAULT_ENDPOINT_URL, DEFAULT_USER_AGENT};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use regions::{load_region, resolve_region_path, RegionConfig, SearchPoint};
