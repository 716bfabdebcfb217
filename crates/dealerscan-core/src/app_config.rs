use std::path::PathBuf;

/// Dealer-locator AJAX endpoint queried when `DEALERSCAN_ENDPOINT_URL` is unset.
pub const DEFAULT_ENDPOINT_URL: &str = "https://www.mcintoshlabs.com/ajax/AjaxFunctions.aspx";

/// Descriptive client identifier sent with every locator request.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub endpoint_url: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    /// Pause between consecutive search points.
    pub inter_request_delay_ms: u64,
    pub log_level: String,
    pub log_file: PathBuf,
    pub regions_dir: PathBuf,
}
