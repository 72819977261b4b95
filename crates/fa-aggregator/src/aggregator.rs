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

//! Aggregation of the seven FMP resources into one fundamentals record

use crate::metrics::{
  book_value_per_share, percent_of, present, price_history, ratio, revenue_growth,
  revenue_history, round_to,
};
use fa_core::{Resource, ResourceFetcher, Result};
use fa_models::fundamentals::UNKNOWN;
use fa_models::upstream::{
  BalanceSheetEntry, CashFlowEntry, CompanyProfile, EarningsCalendarEntry, HistoricalPriceFull,
  IncomeStatementEntry, Quote,
};
use fa_models::{format_market_cap, CompanyFundamentals};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

/// Aggregate everything known about `ticker` into one record.
///
/// Returns `None` when the company profile is empty, malformed or cannot be
/// fetched; that is the "company not found" outcome. Once the profile is in
/// hand the remaining six resources are fetched concurrently and each one
/// that fails only blanks the fields it feeds, so this never fails for a
/// single-resource outage.
#[instrument(skip(fetcher))]
pub async fn aggregate<F>(ticker: &str, fetcher: &F) -> Option<CompanyFundamentals>
where
  F: ResourceFetcher + ?Sized,
{
  let symbol = ticker.trim().to_uppercase();
  if symbol.is_empty() {
    return None;
  }

  let profile = match fetch::<F, Vec<CompanyProfile>>(fetcher, Resource::Profile, &symbol).await {
    Ok(profiles) => match profiles.into_iter().next() {
      Some(profile) => profile,
      None => {
        info!("No profile for {}, company not found", symbol);
        return None;
      }
    },
    Err(e) => {
      info!("Profile for {} unavailable, company not found: {}", symbol, e);
      return None;
    }
  };

  let (income, balance, cash_flow, quote, history, earnings) = futures::join!(
    attempt::<F, Vec<IncomeStatementEntry>>(fetcher, Resource::IncomeStatement, &symbol),
    attempt::<F, Vec<BalanceSheetEntry>>(fetcher, Resource::BalanceSheet, &symbol),
    attempt::<F, Vec<CashFlowEntry>>(fetcher, Resource::CashFlow, &symbol),
    attempt::<F, Vec<Quote>>(fetcher, Resource::Quote, &symbol),
    attempt::<F, HistoricalPriceFull>(fetcher, Resource::HistoricalPrices, &symbol),
    attempt::<F, Vec<EarningsCalendarEntry>>(fetcher, Resource::EarningsCalendar, &symbol),
  );

  let sources = Sources {
    profile,
    income,
    balance: balance.into_iter().next(),
    cash_flow: cash_flow.into_iter().next(),
    quote: quote.into_iter().next().unwrap_or_default(),
    history,
    earnings,
  };

  let company = sources.into_fundamentals(symbol);
  debug!("Aggregated {} ({})", company.symbol, company.name);
  Some(company)
}

/// Fetch and decode one resource.
async fn fetch<F, T>(fetcher: &F, resource: Resource, symbol: &str) -> Result<T>
where
  F: ResourceFetcher + ?Sized,
  T: DeserializeOwned,
{
  let payload = fetcher.fetch_json(&resource.path(symbol)).await?;
  Ok(serde_json::from_value(payload)?)
}

/// Fetch a non-critical resource, substituting its empty value on any failure.
async fn attempt<F, T>(fetcher: &F, resource: Resource, symbol: &str) -> T
where
  F: ResourceFetcher + ?Sized,
  T: DeserializeOwned + Default,
{
  match fetch::<F, T>(fetcher, resource, symbol).await {
    Ok(value) => value,
    Err(e) => {
      warn!("Continuing without {} for {}: {}", resource, symbol, e);
      T::default()
    }
  }
}

/// Decoded inputs of one aggregation; absent resources are empty.
struct Sources {
  profile: CompanyProfile,
  income: Vec<IncomeStatementEntry>,
  balance: Option<BalanceSheetEntry>,
  cash_flow: Option<CashFlowEntry>,
  quote: Quote,
  history: HistoricalPriceFull,
  earnings: Vec<EarningsCalendarEntry>,
}

impl Sources {
  fn into_fundamentals(self, symbol: String) -> CompanyFundamentals {
    let Sources { profile, income, balance, cash_flow, quote, history, earnings } = self;

    let latest_income = income.first().cloned().unwrap_or_default();
    let balance = balance.unwrap_or_default();
    let cash_flow = cash_flow.unwrap_or_default();

    // Only price and P/E fall back to the profile; other market figures are quote-only.
    let current_price = present(quote.price).or(present(profile.price));
    let forward_pe =
      present(quote.price_to_earnings_ratio).or(present(profile.price_to_earnings_ratio));
    let forward_eps = ratio(current_price, forward_pe).map(|eps| round_to(eps, 2));

    CompanyFundamentals {
      symbol,
      name: profile.company_name.clone().unwrap_or_else(|| UNKNOWN.to_string()),
      industry: profile.industry.clone().unwrap_or_else(|| UNKNOWN.to_string()),
      sector: profile.sector.clone(),
      description: profile.description.clone(),
      ceo: profile.ceo.clone(),
      website: profile.website.clone(),
      employees: profile.full_time_employees.clone(),
      ipo_date: profile.ipo_date.clone(),
      exchange: profile.exchange_short_name.clone(),
      country: profile.country.clone(),

      market_cap: format_market_cap(profile.mkt_cap),
      market_cap_raw: present(profile.mkt_cap),
      current_price,
      day_change: present(quote.change),
      day_change_percent: present(quote.changes_percentage),
      volume: present(quote.volume),
      avg_volume: present(quote.avg_volume),
      year_high: present(quote.year_high),
      year_low: present(quote.year_low),
      beta: present(profile.beta),

      forward_pe,
      forward_eps,
      pe_ratio: forward_pe,
      price_target: present(profile.analytic_target),

      eps: latest_income.eps,
      next_quarter_eps: earnings.first().and_then(|entry| entry.eps_estimated),

      revenue_growth: revenue_growth(&income),
      revenue_history: revenue_history(&income),

      gross_margin: percent_of(latest_income.gross_profit, latest_income.revenue),
      operating_margin: percent_of(latest_income.operating_income, latest_income.revenue),
      net_margin: percent_of(latest_income.net_income, latest_income.revenue),

      debt_to_equity: ratio(balance.total_debt, balance.total_stockholders_equity),
      current_ratio: ratio(balance.total_current_assets, balance.total_current_liabilities),
      book_value_per_share: book_value_per_share(&balance, &profile),
      total_debt: present(balance.total_debt),
      total_cash: present(balance.cash_and_cash_equivalents),

      free_cash_flow: cash_flow.free_cash_flow,
      operating_cash_flow: cash_flow.operating_cash_flow,
      capex: cash_flow.capital_expenditure,

      price_history: price_history(history.historical.as_deref().unwrap_or_default()),

      dividend_yield: percent_of(profile.last_div, current_price),
    }
  }
}
