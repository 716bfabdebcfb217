//! HTTP client for the dealer locator's `getDealersInRange` form endpoint.

use std::time::Duration;

use dealerscan_core::{AppConfig, SearchPoint};
use reqwest::Client;

use super::extract::extract_dealers;
use super::types::PointOutcome;
use crate::error::LocatorError;

const REQ_CASE: &str = "getDealersInRange";

/// Queries one locator endpoint, one search point per request.
///
/// Each call is a single POST; failures are never retried.
pub struct DealerLocatorClient {
    client: Client,
    endpoint_url: String,
}

impl DealerLocatorClient {
    /// Creates a client with the given timeout and `User-Agent`.
    ///
    /// Certificate verification is disabled: the locator host serves a chain
    /// that does not validate, and the endpoint only returns public listings.
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        endpoint_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, LocatorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .danger_accept_invalid_certs(true)
            .build()?;
        Ok(Self {
            client,
            endpoint_url: endpoint_url.to_owned(),
        })
    }

    /// Builds a client from the endpoint, timeout and user agent in `config`.
    ///
    /// # Errors
    ///
    /// See [`DealerLocatorClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, LocatorError> {
        Self::new(
            &config.endpoint_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    #[must_use]
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// POSTs the search form for `point` and returns the raw HTML fragment.
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError::Http`] on a connection, TLS, timeout or body read
    /// failure, and [`LocatorError::HttpStatus`] on any non-2xx response.
    pub async fn fetch_dealers_html(
        &self,
        point: &SearchPoint,
        country: &str,
    ) -> Result<String, LocatorError> {
        let form = search_form(point, country);

        let response = self
            .client
            .post(&self.endpoint_url)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LocatorError::HttpStatus {
                status: status.as_u16(),
                url: self.endpoint_url.clone(),
            });
        }

        Ok(response.text().await?)
    }

    /// Fetches and extracts the dealers around one search point.
    ///
    /// Never fails: a request error is logged against the point's postal code
    /// and reported as [`PointOutcome::Failed`].
    pub async fn search_point(&self, point: &SearchPoint, country: &str) -> PointOutcome {
        match self.fetch_dealers_html(point, country).await {
            Ok(body) => {
                let dealers = extract_dealers(&body);
                tracing::debug!(
                    postal_code = %point.postal_code,
                    bytes = body.len(),
                    count = dealers.len(),
                    "parsed locator response"
                );
                if dealers.is_empty() {
                    PointOutcome::NoDealers
                } else {
                    PointOutcome::Dealers(dealers)
                }
            }
            Err(err) => {
                tracing::error!(
                    postal_code = %point.postal_code,
                    error = %err,
                    "error searching dealers"
                );
                PointOutcome::Failed(err)
            }
        }
    }
}

/// Form fields for one `getDealersInRange` request, in the order the site sends them.
fn search_form(point: &SearchPoint, country: &str) -> [(&'static str, String); 6] {
    [
        ("ReqCase", REQ_CASE.to_string()),
        ("radius", point.radius.to_string()),
        ("userLat", point.latitude.to_string()),
        ("userLong", point.longitude.to_string()),
        ("zipCode", point.postal_code.clone()),
        ("country", country.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_form_carries_every_field() {
        let point = SearchPoint {
            postal_code: "0800".to_string(),
            latitude: -12.4634,
            longitude: 130.8456,
            radius: 100,
            label: Some("Darwin".to_string()),
        };

        let form = search_form(&point, "AU");
        assert_eq!(
            form,
            [
                ("ReqCase", "getDealersInRange".to_string()),
                ("radius", "100".to_string()),
                ("userLat", "-12.4634".to_string()),
                ("userLong", "130.8456".to_string()),
                ("zipCode", "0800".to_string()),
                ("country", "AU".to_string()),
            ]
        );
    }

    #[test]
    fn client_keeps_endpoint_url() {
        let client =
            DealerLocatorClient::new("https://locator.example/ajax", 5, "dealerscan-test/0.1")
                .expect("client should build");
        assert_eq!(client.endpoint_url(), "https://locator.example/ajax");
    }
}
