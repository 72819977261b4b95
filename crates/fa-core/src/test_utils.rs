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

//! Helpers shared by the test suites of the fa-* crates.

use crate::{Error, Resource, ResourceFetcher, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

/// Default tolerance for floating-point comparisons
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Assert that two floating-point numbers are approximately equal
pub fn assert_approx_eq(actual: f64, expected: f64, tolerance: f64) {
  assert!(
    (actual - expected).abs() < tolerance,
    "Values not approximately equal:\n  actual:   {}\n  expected: {}\n  diff:     {}\n  tolerance: {}",
    actual,
    expected,
    (actual - expected).abs(),
    tolerance
  );
}

/// Assert that an optional metric is present and approximately `expected`
pub fn assert_some_approx(actual: Option<f64>, expected: f64) {
  match actual {
    Some(value) => assert_approx_eq(value, expected, DEFAULT_TOLERANCE),
    None => panic!("expected Some({}), got None", expected),
  }
}

enum Scripted {
  Json(Value),
  Fail(String),
}

/// A [`ResourceFetcher`] answering from canned payloads keyed by resource.
///
/// Resources without a script answer with an empty collection (the
/// historical-price resource with `{"historical": []}`), which is what the
/// provider returns for symbols it has no data for.
#[derive(Default)]
pub struct StaticFetcher {
  scripts: HashMap<Resource, Scripted>,
  requested: Mutex<Vec<String>>,
}

impl StaticFetcher {
  pub fn new() -> Self {
    Self::default()
  }

  /// Answer `resource` with `payload`
  pub fn with(mut self, resource: Resource, payload: Value) -> Self {
    self.scripts.insert(resource, Scripted::Json(payload));
    self
  }

  /// Fail every request for `resource`
  pub fn failing(mut self, resource: Resource, message: &str) -> Self {
    self.scripts.insert(resource, Scripted::Fail(message.to_string()));
    self
  }

  /// Fail every resource that has not been scripted with a payload
  pub fn failing_unscripted(mut self, message: &str) -> Self {
    for resource in Resource::ALL {
      self
        .scripts
        .entry(resource)
        .or_insert_with(|| Scripted::Fail(message.to_string()));
    }
    self
  }

  /// Every path requested so far, in request order
  pub fn requested_paths(&self) -> Vec<String> {
    self.requested.lock().map(|paths| paths.clone()).unwrap_or_default()
  }

  fn resolve(path: &str) -> Option<Resource> {
    Resource::ALL
      .into_iter()
      .find(|resource| path.starts_with(&format!("/{}/", resource.endpoint())))
  }
}

#[async_trait]
impl ResourceFetcher for StaticFetcher {
  async fn fetch_json(&self, path: &str) -> Result<Value> {
    if let Ok(mut paths) = self.requested.lock() {
      paths.push(path.to_string());
    }

    let resource =
      Self::resolve(path).ok_or_else(|| Error::Http(format!("unexpected path: {}", path)))?;

    match self.scripts.get(&resource) {
      Some(Scripted::Json(payload)) => Ok(payload.clone()),
      Some(Scripted::Fail(message)) => Err(Error::Http(message.clone())),
      None if resource == Resource::HistoricalPrices => Ok(json!({ "historical": [] })),
      None => Ok(json!([])),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_static_fetcher_defaults_and_scripts() {
    let fetcher = StaticFetcher::new()
      .with(Resource::Quote, json!([{ "price": 1.0 }]))
      .failing(Resource::CashFlow, "boom");

    let quote = fetcher.fetch_json(&Resource::Quote.path("aapl")).await.unwrap();
    assert_eq!(quote, json!([{ "price": 1.0 }]));

    let history = fetcher.fetch_json(&Resource::HistoricalPrices.path("AAPL")).await.unwrap();
    assert_eq!(history, json!({ "historical": [] }));

    let income = fetcher.fetch_json(&Resource::IncomeStatement.path("AAPL")).await.unwrap();
    assert_eq!(income, json!([]));

    assert!(matches!(
      fetcher.fetch_json(&Resource::CashFlow.path("AAPL")).await,
      Err(Error::Http(message)) if message == "boom"
    ));
    assert_eq!(fetcher.requested_paths().len(), 4);
  }

  #[tokio::test]
  async fn test_static_fetcher_unknown_path() {
    let fetcher = StaticFetcher::new();
    assert!(fetcher.fetch_json("/stock-news/AAPL").await.is_err());
  }

  #[test]
  fn test_assert_some_approx_within_tolerance() {
    assert_some_approx(Some(0.1 + 0.2), 0.3);
  }

  #[test]
  #[should_panic(expected = "not approximately equal")]
  fn test_assert_some_approx_outside_tolerance() {
    assert_some_approx(Some(1.0), 1.0 + DEFAULT_TOLERANCE * 2.0);
  }
}
