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

//! # fa-core
//!
//! Core types shared by the fa-* crates: configuration, the error type, the
//! catalogue of upstream FMP resources and the [`ResourceFetcher`] capability
//! the aggregator is written against.

pub mod config;
pub mod error;
pub mod fetcher;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::Config;
pub use error::{Error, Result};
pub use fetcher::ResourceFetcher;

/// Base URL for the Financial Modeling Prep v3 API
pub const FMP_BASE_URL: &str = "https://financialmodelingprep.com/api/v3";

/// Key used when no API key is configured. FMP serves a handful of symbols with it.
pub const DEMO_API_KEY: &str = "demo";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Number of annual income statements requested
pub const INCOME_STATEMENT_LIMIT: usize = 5;

/// Number of trading days of closing prices requested
pub const PRICE_HISTORY_POINTS: usize = 30;

/// Number of earnings calendar entries requested
pub const EARNINGS_CALENDAR_LIMIT: usize = 4;

/// The upstream resources consulted for one aggregation.
///
/// Multi-period resources (statements, prices, earnings) are returned by the
/// provider most-recent-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
  Profile,
  IncomeStatement,
  BalanceSheet,
  CashFlow,
  Quote,
  HistoricalPrices,
  EarningsCalendar,
}

impl Resource {
  /// Every resource, in the order the aggregator consults them.
  pub const ALL: [Resource; 7] = [
    Resource::Profile,
    Resource::IncomeStatement,
    Resource::BalanceSheet,
    Resource::CashFlow,
    Resource::Quote,
    Resource::HistoricalPrices,
    Resource::EarningsCalendar,
  ];

  /// Endpoint segment as used in the provider's URL
  pub fn endpoint(&self) -> &'static str {
    match self {
      Resource::Profile => "profile",
      Resource::IncomeStatement => "income-statement",
      Resource::BalanceSheet => "balance-sheet-statement",
      Resource::CashFlow => "cash-flow-statement",
      Resource::Quote => "quote",
      Resource::HistoricalPrices => "historical-price-full",
      Resource::EarningsCalendar => "earning_calendar",
    }
  }

  fn query(&self) -> Option<String> {
    match self {
      Resource::IncomeStatement => Some(format!("limit={}", INCOME_STATEMENT_LIMIT)),
      Resource::BalanceSheet | Resource::CashFlow => Some("limit=1".to_string()),
      Resource::HistoricalPrices => Some(format!("timeseries={}", PRICE_HISTORY_POINTS)),
      Resource::EarningsCalendar => Some(format!("limit={}", EARNINGS_CALENDAR_LIMIT)),
      Resource::Profile | Resource::Quote => None,
    }
  }

  /// Relative path for `ticker`, without the API key.
  ///
  /// The ticker is upper-cased and percent-encoded as a single path segment.
  pub fn path(&self, ticker: &str) -> String {
    let symbol = ticker.trim().to_uppercase();
    let segment = urlencoding::encode(&symbol);
    match self.query() {
      Some(query) => format!("/{}/{}?{}", self.endpoint(), segment, query),
      None => format!("/{}/{}", self.endpoint(), segment),
    }
  }
}

impl std::fmt::Display for Resource {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Resource::Profile => write!(f, "company profile"),
      Resource::IncomeStatement => write!(f, "income statement"),
      Resource::BalanceSheet => write!(f, "balance sheet"),
      Resource::CashFlow => write!(f, "cash flow statement"),
      Resource::Quote => write!(f, "quote"),
      Resource::HistoricalPrices => write!(f, "historical prices"),
      Resource::EarningsCalendar => write!(f, "earnings calendar"),
    }
  }
}
