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

//! HTTP transport layer for Citi Velocity API requests

use cv_core::{Config, Endpoint, Error, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, instrument};
use url::Url;

const JSON: &str = "application/json";
const FORM: &str = "application/x-www-form-urlencoded";

/// Longest slice of a response body quoted in error messages
const BODY_SNIPPET_CHARS: usize = 200;

/// HTTP transport layer for making requests to the Citi Velocity API.
///
/// One attempt per call: no retries, no rate limiting. Timeouts are the only
/// policy applied here.
#[derive(Debug)]
pub struct Transport {
  client: Client,
  base_url: String,
  token_url: String,
  timeout: Duration,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    config.validate()?;

    let timeout = Duration::from_secs(config.timeout_secs);
    let client = Client::builder()
      .timeout(timeout)
      .user_agent(concat!("cv-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self {
      client,
      base_url: config.base_url.clone(),
      token_url: config.token_url.clone(),
      timeout,
    })
  }

  /// Create a mock transport for testing
  #[cfg(test)]
  pub fn new_mock() -> Self {
    Self {
      client: Client::new(),
      base_url: "https://mock.citivelocity.test/authed".to_string(),
      token_url: "https://mock.citivelocity.test/oauth2/token".to_string(),
      timeout: Duration::from_secs(30),
    }
  }

  /// POST a JSON body to an authenticated endpoint.
  ///
  /// The bearer token goes in the `authorization` header and `client_id` in
  /// the query string. Non-2xx answers become [`Error::Request`] carrying the
  /// status and body.
  #[instrument(skip(self, access_token, client_id, body), fields(endpoint = %endpoint))]
  pub async fn post_json<B>(
    &self,
    endpoint: Endpoint,
    access_token: &str,
    client_id: &str,
    body: &B,
  ) -> Result<Value>
  where
    B: Serialize + ?Sized,
  {
    let url = self.build_url(endpoint, client_id)?;
    // path only, the query carries the client id
    debug!("Making request to: {}", url.path());

    let response = self
      .client
      .post(url)
      .header(CONTENT_TYPE, JSON)
      .header(ACCEPT, JSON)
      .header(AUTHORIZATION, format!("Bearer {}", access_token))
      .json(body)
      .send()
      .await
      .map_err(|e| {
        error!("Request to {} failed: {}", endpoint, e);
        Error::Request {
          status: e.status().map(|s| s.as_u16()),
          body: None,
          message: format!("Request failed: {}", e),
        }
      })?;

    let text = check_status(response).await?;
    debug!("Response body length: {} bytes", text.len());

    serde_json::from_str::<Value>(&text).map_err(|e| {
      error!("Failed to parse JSON response from {}: {}", endpoint, e);
      Error::Parse(format!("Failed to parse response: {}. Response: {}", e, snippet(&text)))
    })
  }

  /// POST a form to the token endpoint. No bearer header, no `client_id`
  /// query parameter.
  pub async fn post_form(&self, form: &[(&str, &str)]) -> std::result::Result<Response, reqwest::Error> {
    self
      .client
      .post(&self.token_url)
      .header(CONTENT_TYPE, FORM)
      .header(ACCEPT, JSON)
      .form(form)
      .send()
      .await
  }

  /// Build the full URL for an authenticated request
  fn build_url(&self, endpoint: Endpoint, client_id: &str) -> Result<Url> {
    let mut url = Url::parse(&format!("{}{}", self.base_url.trim_end_matches('/'), endpoint.path()))
      .map_err(|e| Error::Config(format!("Invalid base URL: {}", e)))?;

    url.query_pairs_mut().append_pair("client_id", client_id);
    Ok(url)
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Get the token endpoint being used
  pub fn token_url(&self) -> &str {
    &self.token_url
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }
}

/// Return the body of a 2xx response, or a `Request` error with status and body
async fn check_status(response: Response) -> Result<String> {
  let status = response.status();

  if status.is_success() {
    debug!("Request successful with status: {}", status);
    return response.text().await.map_err(|e| Error::Request {
      status: Some(status.as_u16()),
      body: None,
      message: format!("Failed to read response body: {}", e),
    });
  }

  let body = response.text().await.ok();
  error!("Request failed with status: {}", status);
  if let Some(body) = &body {
    error!("Response content: {}", snippet(body));
  }

  Err(Error::Request { status: Some(status.as_u16()), body, message: format!("HTTP error: {}", status) })
}

pub(crate) fn snippet(text: &str) -> String {
  text.chars().take(BODY_SNIPPET_CHARS).collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;
  use wiremock::matchers::{body_json, header, method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  fn transport_for(server: &MockServer) -> Transport {
    let config = Config::new("id", "secret")
      .with_base_urls(format!("{}/authed", server.uri()), format!("{}/oauth2/token", server.uri()));
    Transport::new(&config).unwrap()
  }

  #[test]
  fn test_build_url() {
    let transport = Transport::new_mock();
    let url = transport.build_url(Endpoint::CitiIdsFrom, "my client").unwrap();

    assert_eq!(url.path(), "/authed/citiids/from");
    assert_eq!(url.query(), Some("client_id=my+client"));
    assert!(url.as_str().starts_with("https://mock.citivelocity.test/authed"));
  }

  #[test]
  fn test_build_url_tolerates_trailing_slash() {
    let mut transport = Transport::new_mock();
    transport.base_url.push('/');
    let url = transport.build_url(Endpoint::Data, "id").unwrap();
    assert_eq!(url.path(), "/authed/data");
  }

  #[test]
  fn test_snippet_respects_char_boundaries() {
    let text = "é".repeat(500);
    assert_eq!(snippet(&text).chars().count(), BODY_SNIPPET_CHARS);
  }

  #[tokio::test]
  async fn test_post_json_sends_standard_headers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/authed/metadata"))
      .and(query_param("client_id", "id"))
      .and(header("authorization", "Bearer tok"))
      .and(header("accept", "application/json"))
      .and(header("content-type", "application/json"))
      .and(body_json(json!({"tags": ["A.B"], "frequency": "EOD"})))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
      .expect(1)
      .mount(&server)
      .await;

    let transport = transport_for(&server);
    let value = transport
      .post_json(Endpoint::Metadata, "tok", "id", &json!({"tags": ["A.B"], "frequency": "EOD"}))
      .await
      .unwrap();

    assert_eq!(value, json!({"ok": true}));
  }

  #[tokio::test]
  async fn test_post_json_non_2xx_carries_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/authed/data"))
      .respond_with(ResponseTemplate::new(403).set_body_string("not entitled"))
      .mount(&server)
      .await;

    let transport = transport_for(&server);
    let err = transport.post_json(Endpoint::Data, "tok", "id", &json!({})).await.unwrap_err();

    match err {
      Error::Request { status, body, .. } => {
        assert_eq!(status, Some(403));
        assert_eq!(body.as_deref(), Some("not entitled"));
      }
      other => panic!("Expected Request error, got {:?}", other),
    }
  }

  #[tokio::test]
  async fn test_post_json_invalid_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/authed/taglisting"))
      .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
      .mount(&server)
      .await;

    let transport = transport_for(&server);
    let err = transport.post_json(Endpoint::TagListing, "tok", "id", &json!({})).await.unwrap_err();
    assert!(matches!(err, Error::Parse(msg) if msg.contains("maintenance")));
  }

  #[tokio::test]
  async fn test_post_json_transport_failure_has_no_status() {
    let config = Config::new("id", "secret")
      .with_base_urls("http://127.0.0.1:9/authed", "http://127.0.0.1:9/oauth2/token");
    let transport = Transport::new(&config).unwrap();

    let err = transport.post_json(Endpoint::Data, "tok", "id", &json!({})).await.unwrap_err();
    assert!(matches!(err, Error::Request { status: None, body: None, .. }));
    assert!(err.is_retryable());
  }
}
