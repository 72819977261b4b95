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

//! Payload models for the FMP v3 resources consulted by the aggregator
//!
//! Only the fields the aggregator reads are modelled; everything else in the
//! provider's responses is ignored. Numeric fields go through
//! [`crate::de::lenient_f64`] so that one unexpected value does not reject
//! the whole payload.

use crate::de::{lenient_f64, lenient_string};
use serde::{Deserialize, Serialize};

/// Company profile (`/profile/{ticker}`), one element per symbol
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
  #[serde(default, deserialize_with = "lenient_string")]
  pub symbol: Option<String>,

  #[serde(default, deserialize_with = "lenient_f64")]
  pub price: Option<f64>,

  #[serde(default, deserialize_with = "lenient_f64")]
  pub beta: Option<f64>,

  /// Market capitalization in dollars
  #[serde(default, deserialize_with = "lenient_f64")]
  pub mkt_cap: Option<f64>,

  /// Last annual dividend per share
  #[serde(default, deserialize_with = "lenient_f64")]
  pub last_div: Option<f64>,

  #[serde(default, deserialize_with = "lenient_string")]
  pub company_name: Option<String>,

  #[serde(default, deserialize_with = "lenient_string")]
  pub exchange_short_name: Option<String>,

  #[serde(default, deserialize_with = "lenient_string")]
  pub industry: Option<String>,

  #[serde(default, deserialize_with = "lenient_string")]
  pub website: Option<String>,

  #[serde(default, deserialize_with = "lenient_string")]
  pub description: Option<String>,

  #[serde(default, deserialize_with = "lenient_string")]
  pub ceo: Option<String>,

  #[serde(default, deserialize_with = "lenient_string")]
  pub sector: Option<String>,

  #[serde(default, deserialize_with = "lenient_string")]
  pub country: Option<String>,

  /// Delivered by FMP as a string, e.g. `"164000"`; kept as text
  #[serde(default, deserialize_with = "lenient_string")]
  pub full_time_employees: Option<String>,

  #[serde(default, deserialize_with = "lenient_string")]
  pub ipo_date: Option<String>,

  #[serde(default, deserialize_with = "lenient_f64")]
  pub price_to_earnings_ratio: Option<f64>,

  /// Analyst consensus price target
  #[serde(default, deserialize_with = "lenient_f64")]
  pub analytic_target: Option<f64>,
}

/// Annual income statement (`/income-statement/{ticker}`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatementEntry {
  #[serde(default, deserialize_with = "lenient_string")]
  pub calendar_year: Option<String>,

  #[serde(default, deserialize_with = "lenient_f64")]
  pub revenue: Option<f64>,

  #[serde(default, deserialize_with = "lenient_f64")]
  pub gross_profit: Option<f64>,

  #[serde(default, deserialize_with = "lenient_f64")]
  pub operating_income: Option<f64>,

  #[serde(default, deserialize_with = "lenient_f64")]
  pub net_income: Option<f64>,

  /// Trailing earnings per share
  #[serde(default, deserialize_with = "lenient_f64")]
  pub eps: Option<f64>,
}

/// Balance sheet statement (`/balance-sheet-statement/{ticker}`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheetEntry {
  #[serde(default, deserialize_with = "lenient_f64")]
  pub total_debt: Option<f64>,

  #[serde(default, deserialize_with = "lenient_f64")]
  pub total_stockholders_equity: Option<f64>,

  #[serde(default, deserialize_with = "lenient_f64")]
  pub total_current_assets: Option<f64>,

  #[serde(default, deserialize_with = "lenient_f64")]
  pub total_current_liabilities: Option<f64>,

  #[serde(default, deserialize_with = "lenient_f64")]
  pub cash_and_cash_equivalents: Option<f64>,

  #[serde(default, deserialize_with = "lenient_f64")]
  pub common_stock: Option<f64>,
}

/// Cash flow statement (`/cash-flow-statement/{ticker}`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowEntry {
  #[serde(default, deserialize_with = "lenient_f64")]
  pub free_cash_flow: Option<f64>,

  #[serde(default, deserialize_with = "lenient_f64")]
  pub operating_cash_flow: Option<f64>,

  /// Usually negative
  #[serde(default, deserialize_with = "lenient_f64")]
  pub capital_expenditure: Option<f64>,
}

/// Real-time quote (`/quote/{ticker}`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
  #[serde(default, deserialize_with = "lenient_f64")]
  pub price: Option<f64>,

  #[serde(default, deserialize_with = "lenient_f64")]
  pub price_to_earnings_ratio: Option<f64>,

  #[serde(default, deserialize_with = "lenient_f64")]
  pub year_high: Option<f64>,

  #[serde(default, deserialize_with = "lenient_f64")]
  pub year_low: Option<f64>,

  #[serde(default, deserialize_with = "lenient_f64")]
  pub change: Option<f64>,

  #[serde(default, deserialize_with = "lenient_f64")]
  pub changes_percentage: Option<f64>,

  #[serde(default, deserialize_with = "lenient_f64")]
  pub volume: Option<f64>,

  #[serde(default, deserialize_with = "lenient_f64")]
  pub avg_volume: Option<f64>,
}

/// Daily price series (`/historical-price-full/{ticker}`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPriceFull {
  #[serde(default)]
  pub symbol: Option<String>,

  /// Most recent day first; absent for unknown symbols
  #[serde(default)]
  pub historical: Option<Vec<HistoricalPrice>>,
}

/// One trading day of the historical series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPrice {
  #[serde(default, deserialize_with = "lenient_string")]
  pub date: Option<String>,

  #[serde(default, deserialize_with = "lenient_f64")]
  pub close: Option<f64>,
}

/// Earnings calendar entry (`/earning_calendar/{ticker}`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsCalendarEntry {
  /// Consensus EPS estimate
  #[serde(default, deserialize_with = "lenient_f64")]
  pub eps_estimated: Option<f64>,
}
