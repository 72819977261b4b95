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

//! Server configuration

use fa_core::{Config as FmpConfig, Error, Result};
use std::env;

/// Default bind address
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
  pub fmp: FmpConfig,
}

impl ServerConfig {
  /// Load from `FA_HOST`, `FA_PORT` and the FMP variables
  pub fn from_env() -> Result<Self> {
    let fmp = FmpConfig::from_env()?;
    Self::from_lookup(|name| env::var(name).ok(), fmp)
  }

  fn from_lookup<F>(lookup: F, fmp: FmpConfig) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let host = lookup("FA_HOST")
      .filter(|host| !host.trim().is_empty())
      .unwrap_or_else(|| DEFAULT_HOST.to_string());

    let port = match lookup("FA_PORT") {
      Some(raw) => {
        raw.trim().parse().map_err(|_| Error::Config(format!("Invalid FA_PORT: {}", raw)))?
      }
      None => DEFAULT_PORT,
    };

    Ok(Self { host, port, fmp })
  }

  pub fn bind_address(&self) -> (String, u16) {
    (self.host.clone(), self.port)
  }
}
