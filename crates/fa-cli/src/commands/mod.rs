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

pub mod lookup;
pub mod watchlist;

use crate::config::Config;
use anyhow::{bail, Context, Result};
use fa_client::Transport;
use fa_models::CompanyFundamentals;
use tracing::info;

/// Aggregate `ticker` against the live provider.
pub async fn fetch_company(ticker: &str, config: &Config) -> Result<CompanyFundamentals> {
  let transport = Transport::new(&config.api_config).context("Failed to create FMP transport")?;

  info!("Looking up {}", ticker.trim().to_uppercase());
  match fa_aggregator::aggregate(ticker, &transport).await {
    Some(company) => Ok(company),
    None => bail!("Company not found: {}", ticker.trim().to_uppercase()),
  }
}
