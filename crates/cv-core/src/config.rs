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

//! Configuration management for the Citi Velocity client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Environment variable holding the client id
pub const CLIENT_ID_VAR: &str = "CITI_CLIENT_ID";
/// Environment variable holding the client secret
pub const CLIENT_SECRET_VAR: &str = "CITI_CLIENT_SECRET";

/// OAuth2 client credentials.
///
/// Immutable once built; the secret is never printed by `Debug` and never
/// serialized.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Credentials {
  client_id: String,
  #[serde(skip_serializing)]
  client_secret: String,
}

impl Credentials {
  pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
    Self { client_id: client_id.into(), client_secret: client_secret.into() }
  }

  pub fn client_id(&self) -> &str {
    &self.client_id
  }

  pub fn client_secret(&self) -> &str {
    &self.client_secret
  }
}

impl std::fmt::Debug for Credentials {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Credentials")
      .field("client_id", &self.client_id)
      .field("client_secret", &"<redacted>")
      .finish()
  }
}

/// Main configuration struct for the Citi Velocity client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Client credentials exchanged for bearer tokens
  pub credentials: Credentials,

  /// Base URL of the authenticated charting endpoints
  pub base_url: String,

  /// OAuth2 token endpoint
  pub token_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Config {
  /// Build a config from explicit credentials and the vendor defaults
  pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
    Config {
      credentials: Credentials::new(client_id, client_secret),
      base_url: crate::CITI_VELOCITY_BASE_URL.to_string(),
      token_url: crate::CITI_VELOCITY_TOKEN_URL.to_string(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
    }
  }

  /// Load configuration from environment variables (and `.env` if present)
  pub fn from_env() -> Result<Self> {
    Self::resolve(None, None)
  }

  /// Resolve credentials, preferring explicit values and falling back to
  /// `CITI_CLIENT_ID` / `CITI_CLIENT_SECRET` field by field.
  pub fn resolve(client_id: Option<String>, client_secret: Option<String>) -> Result<Self> {
    dotenv().ok();
    Self::resolve_with(client_id, client_secret, |key| env::var(key).ok())
  }

  /// Like [`Config::resolve`], reading variables through `lookup` instead of
  /// the process environment. No `.env` file is loaded.
  pub fn resolve_with<F>(
    client_id: Option<String>,
    client_secret: Option<String>,
    lookup: F,
  ) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

    let client_id = non_empty(client_id).or_else(|| non_empty(lookup(CLIENT_ID_VAR)));
    let client_secret = non_empty(client_secret).or_else(|| non_empty(lookup(CLIENT_SECRET_VAR)));

    let (client_id, client_secret) = match (client_id, client_secret) {
      (Some(id), Some(secret)) => (id, secret),
      _ => {
        return Err(Error::Config(format!(
          "Client credentials must be provided either as arguments or through {} and {} environment variables",
          CLIENT_ID_VAR, CLIENT_SECRET_VAR
        )));
      }
    };

    let base_url = lookup("CV_BASE_URL").unwrap_or_else(|| crate::CITI_VELOCITY_BASE_URL.to_string());
    let token_url =
      lookup("CV_TOKEN_URL").unwrap_or_else(|| crate::CITI_VELOCITY_TOKEN_URL.to_string());

    let timeout_secs = lookup("CV_TIMEOUT_SECS")
      .unwrap_or_else(|| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid CV_TIMEOUT_SECS".to_string()))?;

    let config = Config {
      credentials: Credentials::new(client_id, client_secret),
      base_url,
      token_url,
      timeout_secs,
    };
    config.validate()?;
    Ok(config)
  }

  /// Point both the token and data endpoints at another host (tests, proxies)
  pub fn with_base_urls(mut self, base_url: impl Into<String>, token_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self.token_url = token_url.into();
    self
  }

  /// Check that both URLs parse
  pub fn validate(&self) -> Result<()> {
    Url::parse(&self.base_url)
      .map_err(|e| Error::Config(format!("Invalid base URL {}: {}", self.base_url, e)))?;
    Url::parse(&self.token_url)
      .map_err(|e| Error::Config(format!("Invalid token URL {}: {}", self.token_url, e)))?;
    Ok(())
  }
}
