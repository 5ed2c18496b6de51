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

use crate::auth::Authenticator;
use crate::endpoints::{
  data::{DataEndpoints, MetadataParams, TimeseriesParams},
  identifiers::IdentifierEndpoints,
  tags::{TagEndpoints, TagListingParams},
};
use crate::token::{Clock, SystemClock, TokenManager};
use crate::transport::Transport;
use chrono::{DateTime, Utc};
use cv_core::{Config, Result};
use cv_models::IdentifierQuery;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Main Citi Velocity API client
///
/// Owns the credentials and the current bearer token. Every request is
/// validated locally first, then a token is fetched if the current one is
/// absent or expired, then the request is sent. Cloning is cheap and clones
/// share the token.
///
/// # Examples
///
/// ```rust,no_run
/// use cv_client::{CitiVelocityClient, TimeseriesParams};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///   let client = CitiVelocityClient::from_env()?;
///
///   let params = TimeseriesParams::new(["COMMODITIES.SPOT.SPOT_GOLD"], "2024-01-01", "2024-03-31");
///   let data = client.timeseries(&params).await?;
///   println!("{}", data);
///
///   Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CitiVelocityClient {
  transport: Arc<Transport>,
  tokens: Arc<TokenManager>,
}

impl CitiVelocityClient {
  /// Create a new client. No network traffic happens until the first request.
  ///
  /// # Errors
  ///
  /// Returns an error if a URL in `config` is invalid or the HTTP client
  /// cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    Self::with_clock(config, Arc::new(SystemClock))
  }

  /// Create a client that reads time from `clock` for token expiry
  pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Result<Self> {
    let transport = Arc::new(Transport::new(&config)?);
    let authenticator = Authenticator::new(transport.clone(), clock.clone());
    let tokens = Arc::new(TokenManager::new(config.credentials, authenticator, clock));

    info!("Citi Velocity client created for {}", transport.base_url());
    Ok(Self { transport, tokens })
  }

  /// Create a client from `CITI_CLIENT_ID` / `CITI_CLIENT_SECRET`
  pub fn from_env() -> Result<Self> {
    Self::new(Config::from_env()?)
  }

  /// Create a client from explicit credentials, falling back to the
  /// environment for whichever is `None`.
  ///
  /// # Errors
  ///
  /// [`cv_core::Error::Config`] if either credential cannot be resolved.
  pub fn with_credentials(client_id: Option<String>, client_secret: Option<String>) -> Result<Self> {
    Self::new(Config::resolve(client_id, client_secret)?)
  }

  pub fn client_id(&self) -> &str {
    self.tokens.client_id()
  }

  /// Whether a token is held and has not expired. Never authenticates.
  pub async fn is_token_valid(&self) -> bool {
    self.tokens.is_token_valid().await
  }

  /// Expiry of the current token, if any
  pub async fn token_expires_at(&self) -> Option<DateTime<Utc>> {
    self.tokens.expires_at().await
  }

  /// Authenticate now, replacing any current token
  pub async fn authenticate(&self) -> Result<()> {
    self.tokens.refresh().await
  }

  /// Timeseries and metadata endpoints
  pub fn data(&self) -> DataEndpoints {
    DataEndpoints::new(self.transport.clone(), self.tokens.clone())
  }

  /// Tag discovery endpoints
  pub fn tags(&self) -> TagEndpoints {
    TagEndpoints::new(self.transport.clone(), self.tokens.clone())
  }

  /// Citi ID conversion endpoints
  pub fn identifiers(&self) -> IdentifierEndpoints {
    IdentifierEndpoints::new(self.transport.clone(), self.tokens.clone())
  }

  /// Shorthand for `self.data().timeseries(params)`
  pub async fn timeseries(&self, params: &TimeseriesParams) -> Result<Value> {
    self.data().timeseries(params).await
  }

  /// Shorthand for `self.data().metadata(params)`
  pub async fn metadata(&self, params: &MetadataParams) -> Result<Value> {
    self.data().metadata(params).await
  }

  /// Shorthand for `self.tags().tag_listing(params)`
  pub async fn tag_listing(&self, params: &TagListingParams) -> Result<Value> {
    self.tags().tag_listing(params).await
  }

  /// Shorthand for `self.identifiers().citi_ids(queries)`
  pub async fn citi_ids(&self, queries: &[IdentifierQuery]) -> Result<Value> {
    self.identifiers().citi_ids(queries).await
  }

  /// Shorthand for `self.identifiers().identifier_info(citi_ids)`
  pub async fn identifier_info(&self, citi_ids: &[u64]) -> Result<Value> {
    self.identifiers().identifier_info(citi_ids).await
  }
}

impl std::fmt::Debug for CitiVelocityClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CitiVelocityClient")
      .field("transport", &self.transport)
      .field("tokens", &self.tokens)
      .finish()
  }
}
