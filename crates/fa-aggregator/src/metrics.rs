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

//! Metric derivations over provider payloads.
//!
//! The provider reports "no value" as missing, `null` or `0` depending on the
//! endpoint, so ratios treat a zero input as absent: a company with zero
//! revenue gets no margin rather than a division by zero or a 0% margin.
//! Pass-through fields (EPS, cash flow lines, estimates) keep zero.

use fa_core::PRICE_HISTORY_POINTS;
use fa_models::upstream::{
  BalanceSheetEntry, CompanyProfile, HistoricalPrice, IncomeStatementEntry,
};
use fa_models::{PricePoint, RevenuePoint};

/// `Some` only for nonzero, finite values.
pub fn present(value: Option<f64>) -> Option<f64> {
  value.filter(|v| *v != 0.0 && v.is_finite())
}

/// `numerator / denominator` when both are present.
pub fn ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
  let quotient = present(numerator)? / present(denominator)?;
  quotient.is_finite().then_some(quotient)
}

/// `part / whole * 100` when both are present.
pub fn percent_of(part: Option<f64>, whole: Option<f64>) -> Option<f64> {
  ratio(part, whole).map(|r| r * 100.0)
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
  let factor = 10f64.powi(decimals);
  (value * factor).round() / factor
}

/// Year-over-year growth between the two most recent nonzero revenues, in percent.
///
/// `statements` must be most-recent-first.
pub fn revenue_growth(statements: &[IncomeStatementEntry]) -> Option<f64> {
  let mut revenues = statements.iter().filter_map(|s| present(s.revenue));
  let latest = revenues.next()?;
  let previous = revenues.next()?;
  percent_of(Some(latest - previous), Some(previous))
    .or_else(|| (latest == previous).then_some(0.0))
}

/// Annual revenue, oldest year first.
///
/// Statements without a nonzero revenue or a calendar year are skipped.
pub fn revenue_history(statements: &[IncomeStatementEntry]) -> Vec<RevenuePoint> {
  let mut history: Vec<RevenuePoint> = statements
    .iter()
    .rev()
    .filter_map(|s| {
      let revenue = present(s.revenue)?;
      let year = s.calendar_year.clone()?;
      Some(RevenuePoint { year, revenue })
    })
    .collect();
  history.sort_by_key(|point| point.year.parse::<i32>().ok());
  history
}

/// Closing prices, oldest day first, at most [`PRICE_HISTORY_POINTS`] days.
///
/// Days without a date or a close are skipped.
pub fn price_history(series: &[HistoricalPrice]) -> Vec<PricePoint> {
  let mut history: Vec<PricePoint> = series
    .iter()
    .rev()
    .filter_map(|day| {
      let close = day.close.filter(|c| c.is_finite())?;
      Some(PricePoint { date: day.date.clone()?, close })
    })
    .collect();
  // ISO dates order lexicographically.
  history.sort_by(|a, b| a.date.cmp(&b.date));

  if history.len() > PRICE_HISTORY_POINTS {
    history.drain(..history.len() - PRICE_HISTORY_POINTS);
  }
  history
}

/// Stockholders' equity per implied share, where shares = market cap / price.
///
/// Requires a nonzero equity and common stock line on the balance sheet.
pub fn book_value_per_share(balance: &BalanceSheetEntry, profile: &CompanyProfile) -> Option<f64> {
  let equity = present(balance.total_stockholders_equity)?;
  present(balance.common_stock)?;
  let shares = ratio(profile.mkt_cap, profile.price)?;
  ratio(Some(equity), Some(shares))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn statement(year: Option<&str>, revenue: Option<f64>) -> IncomeStatementEntry {
    IncomeStatementEntry {
      calendar_year: year.map(str::to_string),
      revenue,
      ..Default::default()
    }
  }

  fn day(date: &str, close: f64) -> HistoricalPrice {
    HistoricalPrice { date: Some(date.to_string()), close: Some(close) }
  }

  #[test]
  fn test_present_and_ratio() {
    assert_eq!(present(Some(0.0)), None);
    assert_eq!(present(Some(f64::INFINITY)), None);
    assert_eq!(present(Some(-2.0)), Some(-2.0));
    assert_eq!(ratio(Some(500.0), Some(1000.0)), Some(0.5));
    assert_eq!(ratio(Some(500.0), Some(0.0)), None);
    assert_eq!(ratio(None, Some(1.0)), None);
    assert_eq!(percent_of(Some(1.0), Some(4.0)), Some(25.0));
  }

  #[test]
  fn test_round_to() {
    assert_eq!(round_to(6.908127, 2), 6.91);
    assert_eq!(round_to(-1.234, 1), -1.2);
  }

  #[test]
  fn test_revenue_growth() {
    let statements = vec![statement(None, Some(200.0)), statement(None, Some(100.0))];
    assert_eq!(revenue_growth(&statements), Some(100.0));

    let shrinking = vec![statement(None, Some(50.0)), statement(None, Some(100.0))];
    assert_eq!(revenue_growth(&shrinking), Some(-50.0));

    let flat = vec![statement(None, Some(100.0)), statement(None, Some(100.0))];
    assert_eq!(revenue_growth(&flat), Some(0.0));
  }

  #[test]
  fn test_revenue_growth_skips_zero_revenue() {
    let statements = vec![
      statement(None, Some(200.0)),
      statement(None, Some(0.0)),
      statement(None, None),
      statement(None, Some(100.0)),
    ];
    assert_eq!(revenue_growth(&statements), Some(100.0));
    assert_eq!(revenue_growth(&statements[..1]), None);
    assert_eq!(revenue_growth(&[]), None);
  }

  #[test]
  fn test_revenue_history_is_chronological() {
    let statements = vec![
      statement(Some("2025"), Some(300.0)),
      statement(Some("2024"), Some(200.0)),
      statement(None, Some(150.0)),
      statement(Some("2022"), Some(0.0)),
      statement(Some("2021"), Some(100.0)),
    ];

    let history = revenue_history(&statements);
    let years: Vec<&str> = history.iter().map(|p| p.year.as_str()).collect();
    assert_eq!(years, vec!["2021", "2024", "2025"]);
    assert_eq!(history[2].revenue, 300.0);
  }

  #[test]
  fn test_price_history_orders_and_caps() {
    let series = vec![day("2026-01-02", 102.0), day("2026-01-01", 100.0)];
    let history = price_history(&series);
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].close, 100.0);
    assert_eq!(history[1].close, 102.0);

    let shuffled = vec![day("2026-01-03", 3.0), day("2026-01-01", 1.0), day("2026-01-02", 2.0)];
    let closes: Vec<f64> = price_history(&shuffled).iter().map(|p| p.close).collect();
    assert_eq!(closes, vec![1.0, 2.0, 3.0]);

    let long: Vec<HistoricalPrice> =
      (1..=40).rev().map(|d| day(&format!("2026-02-{:02}", d), d as f64)).collect();
    let history = price_history(&long);
    assert_eq!(history.len(), PRICE_HISTORY_POINTS);
    assert_eq!(history.first().map(|p| p.close), Some(11.0));
    assert_eq!(history.last().map(|p| p.close), Some(40.0));
  }

  #[test]
  fn test_price_history_skips_incomplete_days() {
    let series = vec![
      HistoricalPrice { date: None, close: Some(1.0) },
      HistoricalPrice { date: Some("2026-01-01".to_string()), close: None },
      day("2026-01-02", 2.0),
    ];
    assert_eq!(price_history(&series), vec![PricePoint { date: "2026-01-02".to_string(), close: 2.0 }]);
  }

  #[test]
  fn test_book_value_per_share() {
    let balance = BalanceSheetEntry {
      total_stockholders_equity: Some(1000.0),
      common_stock: Some(50.0),
      ..Default::default()
    };
    let profile = CompanyProfile { mkt_cap: Some(1000.0), price: Some(10.0), ..Default::default() };
    assert_eq!(book_value_per_share(&balance, &profile), Some(10.0));

    let no_common = BalanceSheetEntry { common_stock: None, ..balance.clone() };
    assert_eq!(book_value_per_share(&no_common, &profile), None);

    let no_price = CompanyProfile { price: None, ..profile };
    assert_eq!(book_value_per_share(&balance, &no_price), None);
  }
}
