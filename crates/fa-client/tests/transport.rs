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

use fa_client::{Config, Error, ResourceFetcher, Transport};
use fa_core::Resource;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn transport_for(server: &MockServer) -> Transport {
  let mut config = Config::default_with_key("secret".to_string());
  config.base_url = format!("{}/api/v3", server.uri());
  Transport::new(&config).unwrap()
}

#[tokio::test]
async fn test_forwards_api_key_and_query() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/v3/income-statement/AAPL"))
    .and(query_param("limit", "5"))
    .and(query_param("apikey", "secret"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "revenue": 200 }])))
    .expect(1)
    .mount(&server)
    .await;

  let transport = transport_for(&server);
  let payload = transport.fetch_json(&Resource::IncomeStatement.path("aapl")).await.unwrap();

  assert_eq!(payload, json!([{ "revenue": 200 }]));
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/v3/earning_calendar/AAPL"))
    .respond_with(ResponseTemplate::new(403).set_body_string("premium endpoint"))
    .expect(1)
    .mount(&server)
    .await;

  let transport = transport_for(&server);
  let result = transport.fetch_json(&Resource::EarningsCalendar.path("AAPL")).await;

  assert!(matches!(result, Err(Error::Status { status: 403 })));
}

#[tokio::test]
async fn test_malformed_body_is_an_error() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/v3/quote/AAPL"))
    .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
    .mount(&server)
    .await;

  let transport = transport_for(&server);
  let result = transport.fetch_json(&Resource::Quote.path("AAPL")).await;

  assert!(matches!(result, Err(Error::Serde(_))));
}

#[tokio::test]
async fn test_error_envelope_is_an_error() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/v3/profile/AAPL"))
    .respond_with(
      ResponseTemplate::new(200).set_body_json(json!({ "Error Message": "Invalid API KEY." })),
    )
    .mount(&server)
    .await;

  let transport = transport_for(&server);
  let result = transport.fetch_json(&Resource::Profile.path("AAPL")).await;

  match result {
    Err(Error::Api(message)) => assert_eq!(message, "Invalid API KEY."),
    other => panic!("Expected Api error, got {:?}", other),
  }
}

#[tokio::test]
async fn test_unreachable_host_is_an_error() {
  let mut config = Config::default_with_key("secret".to_string());
  config.base_url = "http://127.0.0.1:9/api/v3".to_string();
  config.timeout_secs = 2;
  let transport = Transport::new(&config).unwrap();

  let result = transport.fetch_json(&Resource::Profile.path("AAPL")).await;

  assert!(matches!(result, Err(Error::Http(_))));
}
