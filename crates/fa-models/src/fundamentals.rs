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

//! The aggregated fundamentals record served to callers

use serde::{Deserialize, Serialize};

/// Fallback for `name` and `industry` when the profile carries none
pub const UNKNOWN: &str = "Unknown";

/// One fiscal year of revenue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
  pub year: String,
  pub revenue: f64,
}

/// One trading day's closing price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
  pub date: String,
  pub close: f64,
}

/// Normalized view of a company built from the profile, statements, quote,
/// price history and earnings calendar.
///
/// Only `symbol` is guaranteed; every metric is `None` when the inputs it is
/// derived from were missing, zero where zero is meaningless, or came from a
/// resource that failed. Percentages are expressed as percent (`50.0` is 50%).
/// `revenue_history` and `price_history` are oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyFundamentals {
  // Company info
  pub symbol: String,
  pub name: String,
  pub industry: String,
  pub sector: Option<String>,
  pub description: Option<String>,
  pub ceo: Option<String>,
  pub website: Option<String>,
  /// Passed through as the provider sends it, e.g. `"164000"`
  pub employees: Option<String>,
  pub ipo_date: Option<String>,
  pub exchange: Option<String>,
  pub country: Option<String>,

  // Market data
  /// Display string such as `"$2800.0B"`, or `"N/A"`
  pub market_cap: String,
  pub market_cap_raw: Option<f64>,
  pub current_price: Option<f64>,
  pub day_change: Option<f64>,
  pub day_change_percent: Option<f64>,
  pub volume: Option<f64>,
  pub avg_volume: Option<f64>,
  pub year_high: Option<f64>,
  pub year_low: Option<f64>,
  pub beta: Option<f64>,

  // Valuation
  #[serde(rename = "forwardPE")]
  pub forward_pe: Option<f64>,
  #[serde(rename = "forwardEPS")]
  pub forward_eps: Option<f64>,
  /// Same value as `forward_pe`
  pub pe_ratio: Option<f64>,
  pub price_target: Option<f64>,

  // Earnings
  pub eps: Option<f64>,
  #[serde(rename = "nextQuarterEPS")]
  pub next_quarter_eps: Option<f64>,

  // Growth
  pub revenue_growth: Option<f64>,
  pub revenue_history: Vec<RevenuePoint>,

  // Profitability
  pub gross_margin: Option<f64>,
  pub operating_margin: Option<f64>,
  pub net_margin: Option<f64>,

  // Financial health
  pub debt_to_equity: Option<f64>,
  pub current_ratio: Option<f64>,
  pub book_value_per_share: Option<f64>,
  pub total_debt: Option<f64>,
  pub total_cash: Option<f64>,

  // Cash flow
  pub free_cash_flow: Option<f64>,
  pub operating_cash_flow: Option<f64>,
  pub capex: Option<f64>,

  pub price_history: Vec<PricePoint>,

  pub dividend_yield: Option<f64>,
}

impl CompanyFundamentals {
  /// A record carrying nothing but the symbol, with every fallback applied.
  pub fn empty(symbol: &str) -> Self {
    Self {
      symbol: symbol.trim().to_uppercase(),
      name: UNKNOWN.to_string(),
      industry: UNKNOWN.to_string(),
      sector: None,
      description: None,
      ceo: None,
      website: None,
      employees: None,
      ipo_date: None,
      exchange: None,
      country: None,
      market_cap: crate::format::NOT_AVAILABLE.to_string(),
      market_cap_raw: None,
      current_price: None,
      day_change: None,
      day_change_percent: None,
      volume: None,
      avg_volume: None,
      year_high: None,
      year_low: None,
      beta: None,
      forward_pe: None,
      forward_eps: None,
      pe_ratio: None,
      price_target: None,
      eps: None,
      next_quarter_eps: None,
      revenue_growth: None,
      revenue_history: Vec::new(),
      gross_margin: None,
      operating_margin: None,
      net_margin: None,
      debt_to_equity: None,
      current_ratio: None,
      book_value_per_share: None,
      total_debt: None,
      total_cash: None,
      free_cash_flow: None,
      operating_cash_flow: None,
      capex: None,
      price_history: Vec::new(),
      dividend_yield: None,
    }
  }
}
