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

//! # fa-web
//!
//! HTTP surface over the fundamentals aggregator.
//!
//! | Method | Path                 | Response                                   |
//! |--------|----------------------|--------------------------------------------|
//! | GET    | `/api/stock/{ticker}`| `CompanyFundamentals` JSON, cached 5 min   |
//! | GET    | `/api/stock`         | 400 `{"error":"Ticker is required"}`       |
//! | other  | `/api/stock/...`     | 405 `{"error":"Method not allowed"}`       |
//!
//! Unknown companies and unreachable providers both answer 404.

pub mod config;
pub mod error;
pub mod routes;

pub use config::ServerConfig;
pub use error::ApiError;

use fa_core::ResourceFetcher;
use std::sync::Arc;

/// Shared state handed to every worker
pub struct AppState {
  pub fetcher: Arc<dyn ResourceFetcher>,
}

impl AppState {
  pub fn new(fetcher: Arc<dyn ResourceFetcher>) -> Self {
    Self { fetcher }
  }
}
