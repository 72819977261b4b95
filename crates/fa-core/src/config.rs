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

//! Configuration management for the FMP transport

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the FMP client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// FMP API key, forwarded as the `apikey` query parameter
  pub api_key: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Base URL for the FMP API
  pub base_url: String,
}

impl Config {
  /// Load configuration from environment variables
  ///
  /// `FMP_API_KEY` is preferred, `VITE_FMP_API_KEY` is honoured for
  /// existing front-end setups, and the provider's demo key is used when
  /// neither is set.
  pub fn from_env() -> Result<Self> {
    dotenv().ok();
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Build the configuration from an arbitrary variable source
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let api_key = lookup("FMP_API_KEY")
      .or_else(|| lookup("VITE_FMP_API_KEY"))
      .filter(|key| !key.trim().is_empty())
      .unwrap_or_else(|| crate::DEMO_API_KEY.to_string());

    let timeout_secs = match lookup("FMP_TIMEOUT_SECS") {
      Some(raw) => raw
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("Invalid FMP_TIMEOUT_SECS: {}", raw)))?,
      None => crate::DEFAULT_TIMEOUT_SECS,
    };

    let base_url = lookup("FMP_BASE_URL")
      .map(|url| url.trim_end_matches('/').to_string())
      .unwrap_or_else(|| crate::FMP_BASE_URL.to_string());

    Ok(Config { api_key, timeout_secs, base_url })
  }

  /// Create a config with default values (for testing)
  pub fn default_with_key(api_key: String) -> Self {
    Config {
      api_key,
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      base_url: crate::FMP_BASE_URL.to_string(),
    }
  }

  /// Whether requests will go out with the provider's demo key
  pub fn uses_demo_key(&self) -> bool {
    self.api_key == crate::DEMO_API_KEY
  }
}
