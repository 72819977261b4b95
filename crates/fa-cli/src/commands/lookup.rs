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

use super::fetch_company;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use fa_models::format::{format_percent, format_price, format_ratio};
use fa_models::{format_large_number, CompanyFundamentals};

#[derive(Args, Debug)]
pub struct LookupCommand {
  /// Ticker symbol, e.g. AAPL
  ticker: String,

  /// Print the raw record as JSON
  #[arg(long)]
  json: bool,
}

pub async fn execute(cmd: LookupCommand, config: Config) -> Result<()> {
  let company = fetch_company(&cmd.ticker, &config).await?;

  if cmd.json {
    println!("{}", serde_json::to_string_pretty(&company)?);
  } else {
    print!("{}", render_summary(&company));
  }

  Ok(())
}

/// Block characters used by [`sparkline`], lowest first
const SPARK_BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Human-readable summary of one company
pub fn render_summary(company: &CompanyFundamentals) -> String {
  let mut out = format!("{}  {}\n", company.symbol.bold(), company.name);
  let mut subtitle = company.industry.clone();
  if let Some(exchange) = &company.exchange {
    subtitle = format!("{} · {}", subtitle, exchange);
  }
  out.push_str(&format!("{}\n\n", subtitle.dimmed()));

  let change = match (company.day_change, company.day_change_percent) {
    (Some(change), Some(percent)) => {
      let text = format!("{:+.2} ({:+.2}%)", change, percent);
      if change < 0.0 { text.red().to_string() } else { text.green().to_string() }
    }
    (Some(change), None) => format!("{:+.2}", change),
    _ => String::new(),
  };
  row(&mut out, "Price", &format!("{} {}", format_price(company.current_price), change));
  row(&mut out, "Price Target", &format_price(company.price_target));
  let range = format!("{} - {}", format_price(company.year_low), format_price(company.year_high));
  row(&mut out, "52W Range", &range);
  row(&mut out, "Market Cap", &company.market_cap);
  if let Some(history) = price_history(company) {
    row(&mut out, "30D Trend", &history);
  }
  out.push('\n');

  section(&mut out, "Valuation");
  row(&mut out, "Forward P/E", &format_ratio(company.forward_pe));
  row(&mut out, "Forward EPS", &format_price(company.forward_eps));
  row(&mut out, "Next Qtr EPS", &format_price(company.next_quarter_eps));
  row(&mut out, "EPS", &format_price(company.eps));
  row(&mut out, "Dividend Yield", &format_percent(company.dividend_yield));
  row(&mut out, "Beta", &format_ratio(company.beta));
  out.push('\n');

  section(&mut out, "Growth & Profitability");
  row(&mut out, "Revenue Growth", &format_percent(company.revenue_growth));
  row(&mut out, "Gross Margin", &format_percent(company.gross_margin));
  row(&mut out, "Operating Margin", &format_percent(company.operating_margin));
  row(&mut out, "Net Margin", &format_percent(company.net_margin));
  for point in &company.revenue_history {
    row(&mut out, &format!("  {}", point.year), &format_large_number(Some(point.revenue)));
  }
  out.push('\n');

  section(&mut out, "Balance Sheet & Cash Flow");
  row(&mut out, "Debt/Equity", &format_ratio(company.debt_to_equity));
  row(&mut out, "Current Ratio", &format_ratio(company.current_ratio));
  row(&mut out, "Book Value/Share", &format_price(company.book_value_per_share));
  row(&mut out, "Total Debt", &format_large_number(company.total_debt));
  row(&mut out, "Total Cash", &format_large_number(company.total_cash));
  row(&mut out, "Free Cash Flow", &format_large_number(company.free_cash_flow));
  row(&mut out, "Operating Cash Flow", &format_large_number(company.operating_cash_flow));
  row(&mut out, "CapEx", &format_large_number(company.capex));

  out
}

/// Sparkline of the closes followed by the first and last close with their dates
fn price_history(company: &CompanyFundamentals) -> Option<String> {
  let closes: Vec<f64> = company.price_history.iter().map(|point| point.close).collect();
  let line = sparkline(&closes)?;
  let first = company.price_history.first()?;
  let last = company.price_history.last()?;

  Some(format!(
    "{} {} ({}) → {} ({})",
    line,
    format_price(Some(first.close)),
    first.date,
    format_price(Some(last.close)),
    last.date
  ))
}

/// One block character per close, scaled between the lowest and highest close.
///
/// Green when the last close is at or above the first, red otherwise. Needs at
/// least two points.
pub fn sparkline(closes: &[f64]) -> Option<String> {
  let (first, last) = match closes {
    [first, .., last] => (*first, *last),
    _ => return None,
  };

  let min = closes.iter().copied().fold(f64::INFINITY, f64::min);
  let max = closes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
  let range = if max - min > 0.0 { max - min } else { 1.0 };
  let top = (SPARK_BLOCKS.len() - 1) as f64;

  let line: String = closes
    .iter()
    .map(|close| {
      let level = ((close - min) / range * top).round().clamp(0.0, top);
      SPARK_BLOCKS[level as usize]
    })
    .collect();

  Some(if last >= first { line.green().to_string() } else { line.red().to_string() })
}

fn section(out: &mut String, title: &str) {
  out.push_str(&format!("{}\n", title.cyan().bold()));
}

fn row(out: &mut String, label: &str, value: &str) {
  out.push_str(&format!("  {:<20} {}\n", label, value));
}

#[cfg(test)]
mod tests {
  use super::*;
  use fa_models::{PricePoint, RevenuePoint};

  fn apple() -> CompanyFundamentals {
    let mut company = CompanyFundamentals::empty("AAPL");
    company.name = "Apple Inc.".to_string();
    company.industry = "Technology".to_string();
    company.market_cap = "$2800.0B".to_string();
    company.current_price = Some(195.5);
    company.forward_pe = Some(28.3);
    company.free_cash_flow = Some(-11e9);
    company.revenue_history = vec![RevenuePoint { year: "2025".to_string(), revenue: 394e9 }];
    company.price_history = vec![
      PricePoint { date: "2026-01-01".to_string(), close: 190.0 },
      PricePoint { date: "2026-01-02".to_string(), close: 195.5 },
    ];
    company
  }

  #[test]
  fn test_render_summary() {
    colored::control::set_override(false);
    let summary = render_summary(&apple());

    assert!(summary.starts_with("AAPL  Apple Inc.\nTechnology\n"));
    assert!(summary.contains("Forward P/E          28.30"));
    assert!(summary.contains("Market Cap           $2800.0B"));
    assert!(summary.contains("Free Cash Flow       -$11.00B"));
    assert!(summary.contains("  2025"));
    assert!(
      summary.contains("30D Trend            ▁█ $190.00 (2026-01-01) → $195.50 (2026-01-02)\n")
    );
  }

  #[test]
  fn test_render_summary_missing_values() {
    colored::control::set_override(false);
    let summary = render_summary(&CompanyFundamentals::empty("ZZZZ"));

    assert!(summary.contains("Price Target         N/A"));
    assert!(summary.contains("Debt/Equity          N/A"));
    assert!(!summary.contains("30D Trend"));
  }

  #[test]
  fn test_sparkline_scales_between_low_and_high() {
    colored::control::set_override(false);
    assert_eq!(sparkline(&[1.0, 2.0, 3.0]).as_deref(), Some("▁▅█"));
    assert_eq!(sparkline(&[10.0, 30.0, 20.0, 10.0]).as_deref(), Some("▁█▅▁"));
  }

  #[test]
  fn test_sparkline_flat_series() {
    colored::control::set_override(false);
    assert_eq!(sparkline(&[5.0, 5.0, 5.0]).as_deref(), Some("▁▁▁"));
  }

  #[test]
  fn test_sparkline_needs_two_points() {
    assert_eq!(sparkline(&[]), None);
    assert_eq!(sparkline(&[195.5]), None);
  }

}
