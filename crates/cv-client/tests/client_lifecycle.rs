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

use anyhow::Result;
use chrono::{DateTime, Duration, TimeZone, Utc};
use cv_client::{
  AuthError, CitiVelocityClient, Clock, Config, Error, IdentifierQuery, MetadataParams,
  TagListingParams, TimeseriesParams,
};
use cv_core::types::{IdentifierType, Mic, ProductType};
use serde_json::json;
use std::sync::{Arc, Mutex};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN_PATH: &str = "/markets/cv/api/oauth2/token";
const DATA_PATH: &str = "/authed/data";

struct ManualClock(Mutex<DateTime<Utc>>);

impl ManualClock {
  fn at(now: DateTime<Utc>) -> Arc<Self> {
    Arc::new(Self(Mutex::new(now)))
  }

  fn advance(&self, by: Duration) {
    *self.0.lock().unwrap() += by;
  }
}

impl Clock for ManualClock {
  fn now(&self) -> DateTime<Utc> {
    *self.0.lock().unwrap()
  }
}

fn init_tracing() {
  let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn config_for(server: &MockServer) -> Config {
  Config::new("test-client", "test-secret")
    .with_base_urls(format!("{}/authed", server.uri()), format!("{}{}", server.uri(), TOKEN_PATH))
}

async fn mount_token(server: &MockServer, expires_in: i64, times: u64) {
  Mock::given(method("POST"))
    .and(path(TOKEN_PATH))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "token_type": "bearer",
      "access_token": "tok-1",
      "expires_in": expires_in,
      "scope": "/api"
    })))
    .expect(times)
    .mount(server)
    .await;
}

async fn mount_endpoint(server: &MockServer, endpoint_path: &str, times: u64) {
  Mock::given(method("POST"))
    .and(path(endpoint_path))
    .and(query_param("client_id", "test-client"))
    .and(header("authorization", "Bearer tok-1"))
    .and(header("content-type", "application/json"))
    .and(header("accept", "application/json"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"body": {}, "status": "OK"})))
    .expect(times)
    .mount(server)
    .await;
}

fn gold(start: &str, end: &str) -> TimeseriesParams {
  TimeseriesParams::new(["COMMODITIES.SPOT.SPOT_GOLD"], start, end)
}

fn tags(n: usize) -> Vec<String> {
  (0..n).map(|i| format!("FX.SPOT.EUR.USD.{}", i)).collect()
}

#[tokio::test]
async fn test_token_is_fetched_once_and_refreshed_after_expiry() -> Result<()> {
  init_tracing();
  let server = MockServer::start().await;
  mount_token(&server, 3600, 2).await;
  mount_endpoint(&server, DATA_PATH, 3).await;

  let clock = ManualClock::at(Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap());
  let client = CitiVelocityClient::with_clock(config_for(&server), clock.clone())?;
  assert!(!client.is_token_valid().await);

  client.timeseries(&gold("2024-01-01", "2024-01-31")).await?;
  assert!(client.is_token_valid().await);

  clock.advance(Duration::minutes(30));
  client.timeseries(&gold("2024-01-01", "2024-01-31")).await?;

  clock.advance(Duration::minutes(31));
  assert!(!client.is_token_valid().await);
  client.timeseries(&gold("2024-01-01", "2024-01-31")).await?;
  assert!(client.is_token_valid().await);

  Ok(())
}

#[tokio::test]
async fn test_clones_share_the_token() -> Result<()> {
  let server = MockServer::start().await;
  mount_token(&server, 3600, 1).await;
  mount_endpoint(&server, "/authed/metadata", 2).await;

  let client = CitiVelocityClient::new(config_for(&server))?;
  let other = client.clone();

  client.metadata(&MetadataParams::new(["FX.SPOT.EUR.USD"])).await?;
  other.metadata(&MetadataParams::new(["FX.SPOT.EUR.USD"])).await?;
  Ok(())
}

#[tokio::test]
async fn test_timeseries_payload_on_the_wire() -> Result<()> {
  let server = MockServer::start().await;
  mount_token(&server, 3600, 1).await;

  Mock::given(method("POST"))
    .and(path(DATA_PATH))
    .and(body_partial_json(json!({
      "tags": ["COMMODITIES.SPOT.SPOT_GOLD"],
      "startDate": 20220101,
      "endDate": 20221231,
      "frequency": "DAILY",
      "pricePoints": "OHLC",
      "latestOnly": false
    })))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"body": {}})))
    .expect(1)
    .mount(&server)
    .await;

  let client = CitiVelocityClient::new(config_for(&server))?;
  let params = gold("2022/01/01", "2022-12-31").frequency("daily").price_points("ohlc");
  client.timeseries(&params).await?;
  Ok(())
}

#[tokio::test]
async fn test_metadata_tag_bounds_never_touch_the_network() -> Result<()> {
  let server = MockServer::start().await;
  mount_token(&server, 3600, 0).await;
  mount_endpoint(&server, "/authed/metadata", 0).await;

  let client = CitiVelocityClient::new(config_for(&server))?;

  for n in [0, 1001] {
    let err = client.metadata(&MetadataParams::new(tags(n))).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)), "{} tags: {:?}", n, err);
  }
  assert!(!client.is_token_valid().await);
  Ok(())
}

#[tokio::test]
async fn test_metadata_tag_bounds_accepted() -> Result<()> {
  let server = MockServer::start().await;
  mount_token(&server, 3600, 1).await;
  mount_endpoint(&server, "/authed/metadata", 2).await;

  let client = CitiVelocityClient::new(config_for(&server))?;
  client.metadata(&MetadataParams::new(tags(1))).await?;
  client.metadata(&MetadataParams::new(tags(1000))).await?;
  Ok(())
}

#[tokio::test]
async fn test_timeseries_rejections_never_touch_the_network() -> Result<()> {
  let server = MockServer::start().await;
  mount_token(&server, 3600, 0).await;
  mount_endpoint(&server, DATA_PATH, 0).await;

  let client = CitiVelocityClient::new(config_for(&server))?;

  let rejected = [
    TimeseriesParams::new(tags(0), "20240101", "20240102"),
    TimeseriesParams::new(tags(101), "20240101", "20240102"),
    gold("20240101", "20240102").frequency("YEARLY"),
    gold("20240101", "20240102").price_points("HLC"),
    gold("not-a-date", "20240102"),
  ];
  for params in &rejected {
    let err = client.timeseries(params).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)), "{:?}", err);
  }
  Ok(())
}

#[tokio::test]
async fn test_timeseries_tag_bounds_accepted() -> Result<()> {
  let server = MockServer::start().await;
  mount_token(&server, 3600, 1).await;
  mount_endpoint(&server, DATA_PATH, 2).await;

  let client = CitiVelocityClient::new(config_for(&server))?;
  client.timeseries(&TimeseriesParams::new(tags(1), "20240101", "20240102")).await?;
  client.timeseries(&TimeseriesParams::new(tags(100), "20240101", "20240102")).await?;
  Ok(())
}

#[tokio::test]
async fn test_intraday_metadata_is_passed_through() -> Result<()> {
  let server = MockServer::start().await;
  mount_token(&server, 3600, 1).await;

  let intraday = json!({
    "body": {
      "FX.SPOT.EUR.USD": {"frequency": "INTRADAY", "startDate": 20200101}
    }
  });
  Mock::given(method("POST"))
    .and(path("/authed/metadata"))
    .and(body_partial_json(json!({"frequency": "INTRADAY"})))
    .respond_with(ResponseTemplate::new(200).set_body_json(intraday.clone()))
    .expect(1)
    .mount(&server)
    .await;

  let client = CitiVelocityClient::new(config_for(&server))?;
  let value = client.metadata(&MetadataParams::new(["FX.SPOT.EUR.USD"]).frequency("intraday")).await?;

  assert_eq!(value, intraday);
  assert!(value["body"]["FX.SPOT.EUR.USD"].get("modifiedTimes").is_none());
  Ok(())
}

#[tokio::test]
async fn test_tag_listing_and_identifier_routes() -> Result<()> {
  let server = MockServer::start().await;
  mount_token(&server, 3600, 1).await;

  Mock::given(method("POST"))
    .and(path("/authed/taglisting"))
    .and(body_partial_json(json!({"prefix": "EQUITY.DELTAONE.SPX", "regex": ".*"})))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"body": []})))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("POST"))
    .and(path("/authed/citiids/to"))
    .and(body_partial_json(json!({
      "queries": [{"productType": "STOCK", "identifier": "IBM", "identifierType": "BBT", "mic": "XNYS"}]
    })))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"body": [{"citiId": 42}]})))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("POST"))
    .and(path("/authed/citiids/from"))
    .and(body_partial_json(json!({"ids": [42, 43]})))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"body": []})))
    .expect(1)
    .mount(&server)
    .await;

  let client = CitiVelocityClient::new(config_for(&server))?;

  client.tag_listing(&TagListingParams::new("EQUITY", "DELTAONE").part("SPX").regex(".*")).await?;

  let query = IdentifierQuery::new(ProductType::Stock, "IBM", IdentifierType::Bbt).with_mic(Mic::XNYS);
  let ids = client.citi_ids(&[query]).await?;
  assert_eq!(ids["body"][0]["citiId"], 42);

  client.identifier_info(&[42, 43]).await?;
  Ok(())
}

#[tokio::test]
async fn test_data_endpoint_error_carries_status_and_body() -> Result<()> {
  let server = MockServer::start().await;
  mount_token(&server, 3600, 1).await;

  Mock::given(method("POST"))
    .and(path(DATA_PATH))
    .respond_with(ResponseTemplate::new(500).set_body_string("upstream unavailable"))
    .expect(1)
    .mount(&server)
    .await;

  let client = CitiVelocityClient::new(config_for(&server))?;
  let err = client.timeseries(&gold("20240101", "20240102")).await.unwrap_err();

  assert_eq!(err.status(), Some(500));
  assert!(err.is_retryable());
  match err {
    Error::Request { body, .. } => assert_eq!(body.as_deref(), Some("upstream unavailable")),
    other => panic!("Expected Request error, got {:?}", other),
  }
  Ok(())
}

#[tokio::test]
async fn test_rejected_credentials_surface_as_auth_error() -> Result<()> {
  let server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path(TOKEN_PATH))
    .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "invalid_client"})))
    .expect(1)
    .mount(&server)
    .await;
  mount_endpoint(&server, DATA_PATH, 0).await;

  let client = CitiVelocityClient::new(config_for(&server))?;
  let err = client.timeseries(&gold("20240101", "20240102")).await.unwrap_err();

  assert!(matches!(err, Error::Auth(AuthError::Http { status: 401, .. })));
  assert!(!client.is_token_valid().await);
  Ok(())
}

#[tokio::test]
async fn test_explicit_authenticate_replaces_token() -> Result<()> {
  let server = MockServer::start().await;
  mount_token(&server, 3600, 2).await;

  let client = CitiVelocityClient::new(config_for(&server))?;
  client.authenticate().await?;
  let first = client.token_expires_at().await;
  assert!(first.is_some());

  client.authenticate().await?;
  assert!(client.is_token_valid().await);
  Ok(())
}

#[test]
fn test_missing_credentials_is_config_error() {
  // no process environment and no `.env`: only the explicit id is known
  let err = Config::resolve_with(Some("id".to_string()), None, |_| None).unwrap_err();
  assert!(matches!(err, Error::Config(_)));

  let config = Config::resolve_with(None, None, |key| match key {
    "CITI_CLIENT_ID" => Some("env-id".to_string()),
    "CITI_CLIENT_SECRET" => Some("env-secret".to_string()),
    _ => None,
  })
  .unwrap();
  let client = CitiVelocityClient::new(config).unwrap();
  assert_eq!(client.client_id(), "env-id");
}
