/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! HTTP transport layer for FMP requests

use async_trait::async_trait;
use fa_core::{Config, Error, ResourceFetcher, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};
use url::Url;

/// Key of the error envelope FMP returns with a 200 status
const FMP_ERROR_KEY: &str = "Error Message";

/// HTTP transport bound to the provider's base URL and API key
pub struct Transport {
  client: Client,
  base_url: String,
  api_key: String,
  timeout: Duration,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let timeout = Duration::from_secs(config.timeout_secs);
    let client = Client::builder()
      .timeout(timeout)
      .user_agent(concat!("fa-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self {
      client,
      base_url: config.base_url.trim_end_matches('/').to_string(),
      api_key: config.api_key.clone(),
      timeout,
    })
  }

  /// Create a mock transport for testing
  #[cfg(test)]
  pub fn new_mock() -> Self {
    Self {
      client: Client::new(),
      base_url: "https://mock.financialmodelingprep.com/api/v3".to_string(),
      api_key: "test_key".to_string(),
      timeout: Duration::from_secs(30),
    }
  }

  /// Build the full URL for a relative resource path
  ///
  /// The path's own query parameters are kept and `apikey` is appended.
  pub fn build_url(&self, path: &str) -> Result<Url> {
    let separator = if path.starts_with('/') { "" } else { "/" };
    let mut url = Url::parse(&format!("{}{}{}", self.base_url, separator, path))
      .map_err(|e| Error::Http(format!("Invalid request URL: {}", e)))?;

    url.query_pairs_mut().append_pair("apikey", &self.api_key);

    Ok(url)
  }

  /// Reject FMP's `{"Error Message": "..."}` envelope
  fn check_api_error(payload: &Value) -> Result<()> {
    if let Some(message) = payload.get(FMP_ERROR_KEY) {
      let message = message.as_str().map(str::to_string).unwrap_or_else(|| message.to_string());
      return Err(Error::Api(message));
    }
    Ok(())
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }
}

#[async_trait]
impl ResourceFetcher for Transport {
  #[instrument(skip(self))]
  async fn fetch_json(&self, path: &str) -> Result<Value> {
    let url = self.build_url(path)?;
    debug!("Requesting {}", path);

    let response = self
      .client
      .get(url)
      .send()
      .await
      .map_err(|e| Error::Http(format!("Request failed: {}", e.without_url())))?;

    let status = response.status();
    if !status.is_success() {
      warn!("Request for {} failed with status: {}", path, status);
      return Err(Error::Status { status: status.as_u16() });
    }

    let text = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e.without_url())))?;
    debug!("Response body length: {} bytes", text.len());

    let payload: Value = serde_json::from_str(&text).map_err(|e| {
      error!(
        "Failed to parse JSON response for {}: {} (first 200 chars: {})",
        path,
        e,
        text.chars().take(200).collect::<String>()
      );
      Error::Serde(e)
    })?;

    Self::check_api_error(&payload)?;

    Ok(payload)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_build_url_appends_key() {
    let transport = Transport::new_mock();

    let url = transport.build_url("/profile/AAPL").unwrap();
    assert_eq!(
      url.as_str(),
      "https://mock.financialmodelingprep.com/api/v3/profile/AAPL?apikey=test_key"
    );
  }

  #[test]
  fn test_build_url_keeps_existing_query() {
    let transport = Transport::new_mock();

    let url = transport.build_url("/income-statement/AAPL?limit=5").unwrap();
    assert_eq!(
      url.as_str(),
      "https://mock.financialmodelingprep.com/api/v3/income-statement/AAPL?limit=5&apikey=test_key"
    );
  }

  #[test]
  fn test_build_url_without_leading_slash() {
    let transport = Transport::new_mock();

    let url = transport.build_url("quote/MSFT").unwrap();
    assert!(url.as_str().starts_with("https://mock.financialmodelingprep.com/api/v3/quote/MSFT?"));
  }

  #[test]
  fn test_check_api_error_envelope() {
    let payload = json!({ "Error Message": "Invalid API KEY. Please retry or visit our documentation." });

    match Transport::check_api_error(&payload) {
      Err(Error::Api(message)) => assert!(message.starts_with("Invalid API KEY")),
      other => panic!("Expected Api error, got {:?}", other),
    }
  }

  #[test]
  fn test_check_api_error_success() {
    assert!(Transport::check_api_error(&json!([{ "symbol": "AAPL" }])).is_ok());
    assert!(Transport::check_api_error(&json!({ "historical": [] })).is_ok());
  }

  #[test]
  fn test_transport_from_config() {
    let mut config = Config::default_with_key("abc".to_string());
    config.base_url = "http://localhost:8080/api/v3/".to_string();
    config.timeout_secs = 7;

    let transport = Transport::new(&config).unwrap();
    assert_eq!(transport.base_url(), "http://localhost:8080/api/v3");
    assert_eq!(transport.timeout(), Duration::from_secs(7));
  }
}
