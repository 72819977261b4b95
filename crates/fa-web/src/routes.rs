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

//! Stock lookup routes

use crate::error::ApiError;
use crate::AppState;
use actix_web::http::header;
use actix_web::{web, HttpResponse, ResponseError};
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// Cache lifetime granted to successful lookups
pub const CACHE_CONTROL_VALUE: &str = "public, max-age=300";

/// Register the `/api/stock` routes.
///
/// Any method other than GET answers 405 before the ticker is looked at.
pub fn configure(cfg: &mut web::ServiceConfig) {
  cfg
    .service(
      web::resource(["/api/stock", "/api/stock/"])
        .route(web::get().to(missing_ticker))
        .default_service(web::to(method_not_allowed)),
    )
    .service(
      web::resource("/api/stock/{ticker}")
        .route(web::get().to(get_stock))
        .default_service(web::to(method_not_allowed)),
    );
}

#[instrument(skip(state))]
async fn get_stock(
  state: web::Data<AppState>,
  ticker: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
  let ticker = ticker.into_inner().trim().to_string();
  if ticker.is_empty() {
    return Err(ApiError::MissingTicker);
  }

  // Aggregation runs in its own task so a panic becomes a 500 instead of a
  // dropped connection.
  let fetcher = Arc::clone(&state.fetcher);
  let lookup = ticker.clone();
  let company = actix_web::rt::spawn(async move {
    fa_aggregator::aggregate(&lookup, fetcher.as_ref()).await
  })
  .await
  .map_err(|e| {
    error!("Error fetching company data for {}: {}", ticker, e);
    ApiError::Internal
  })?;

  match company {
    Some(company) => {
      debug!("Serving {} ({})", company.symbol, company.name);
      Ok(
        HttpResponse::Ok()
          .insert_header((header::CACHE_CONTROL, CACHE_CONTROL_VALUE))
          .json(company),
      )
    }
    None => Err(ApiError::NotFound),
  }
}

async fn missing_ticker() -> HttpResponse {
  ApiError::MissingTicker.error_response()
}

async fn method_not_allowed() -> HttpResponse {
  ApiError::MethodNotAllowed.error_response()
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::http::StatusCode;
  use actix_web::{test, App};
  use async_trait::async_trait;
  use fa_core::test_utils::StaticFetcher;
  use fa_core::{Resource, ResourceFetcher};
  use serde_json::{json, Value};

  struct PanickingFetcher;

  #[async_trait]
  impl ResourceFetcher for PanickingFetcher {
    async fn fetch_json(&self, _path: &str) -> fa_core::Result<Value> {
      panic!("fetcher exploded");
    }
  }

  fn apple() -> StaticFetcher {
    StaticFetcher::new()
      .with(
        Resource::Profile,
        json!([{ "companyName": "Apple Inc.", "industry": "Technology", "mktCap": 2.8e12 }]),
      )
      .with(Resource::Quote, json!([{ "price": 195.5, "priceToEarningsRatio": 28.3 }]))
  }

  async fn call(
    fetcher: Arc<dyn ResourceFetcher>,
    req: test::TestRequest,
  ) -> (StatusCode, Option<String>, Value) {
    let app = test::init_service(
      App::new().app_data(web::Data::new(AppState::new(fetcher))).configure(configure),
    )
    .await;

    let resp = test::call_service(&app, req.to_request()).await;
    let status = resp.status();
    let cache_control = resp
      .headers()
      .get(header::CACHE_CONTROL)
      .and_then(|v| v.to_str().ok())
      .map(str::to_string);
    let body: Value = test::read_body_json(resp).await;
    (status, cache_control, body)
  }

  #[actix_web::test]
  async fn test_lookup_success() {
    let (status, cache_control, body) =
      call(Arc::new(apple()), test::TestRequest::get().uri("/api/stock/aapl")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache_control.as_deref(), Some("public, max-age=300"));
    assert_eq!(body["symbol"], "AAPL");
    assert_eq!(body["name"], "Apple Inc.");
    assert_eq!(body["marketCap"], "$2800.0B");
    assert_eq!(body["forwardPE"], 28.3);
    assert_eq!(body["forwardEPS"], 6.91);
  }

  #[actix_web::test]
  async fn test_non_get_is_rejected() {
    let (status, _, body) =
      call(Arc::new(apple()), test::TestRequest::post().uri("/api/stock/AAPL")).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({ "error": "Method not allowed" }));
  }

  #[actix_web::test]
  async fn test_method_checked_before_ticker() {
    let (status, _, body) =
      call(Arc::new(apple()), test::TestRequest::delete().uri("/api/stock")).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "Method not allowed");
  }

  #[actix_web::test]
  async fn test_missing_ticker() {
    for uri in ["/api/stock", "/api/stock/", "/api/stock/%20%20"] {
      let (status, _, body) = call(Arc::new(apple()), test::TestRequest::get().uri(uri)).await;

      assert_eq!(status, StatusCode::BAD_REQUEST, "uri {}", uri);
      assert_eq!(body, json!({ "error": "Ticker is required" }));
    }
  }

  #[actix_web::test]
  async fn test_unknown_company() {
    let fetcher = StaticFetcher::new().with(Resource::Profile, json!([]));
    let (status, cache_control, body) =
      call(Arc::new(fetcher), test::TestRequest::get().uri("/api/stock/NOPE")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(cache_control, None);
    assert_eq!(body, json!({ "error": "Company not found" }));
  }

  #[actix_web::test]
  async fn test_failed_provider_is_not_found() {
    let fetcher = StaticFetcher::new().failing_unscripted("connection refused");
    let (status, _, body) =
      call(Arc::new(fetcher), test::TestRequest::get().uri("/api/stock/AAPL")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Company not found");
  }

  #[actix_web::test]
  async fn test_aggregation_panic_is_internal_error() {
    let (status, _, body) =
      call(Arc::new(PanickingFetcher), test::TestRequest::get().uri("/api/stock/AAPL")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch company data" }));
  }
}
