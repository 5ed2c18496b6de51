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

//! Token lifecycle.
//!
//! A client is always in one of two states: no usable token (never fetched,
//! or expired), or a valid token. Expiry is detected lazily when a request
//! needs the token; there is no background refresh.

use crate::auth::Authenticator;
use chrono::{DateTime, Duration, TimeZone, Utc};
use cv_core::{AuthError, Credentials, Result, DEFAULT_TOKEN_LIFETIME_SECS};
use cv_models::TokenResponse;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, instrument};

/// Source of wall-clock time for expiry checks
pub trait Clock: Send + Sync {
  fn now(&self) -> DateTime<Utc>;
}

/// The real clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> DateTime<Utc> {
    Utc::now()
  }
}

/// A bearer token and its validity window.
///
/// Replaced wholesale on re-authentication, never mutated.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenState {
  access_token: String,
  issued_at: DateTime<Utc>,
  expires_in: Duration,
}

impl TokenState {
  pub fn new(access_token: impl Into<String>, issued_at: DateTime<Utc>, expires_in: Duration) -> Self {
    Self { access_token: access_token.into(), issued_at, expires_in }
  }

  /// Build from a token response received at `received_at`.
  ///
  /// The vendor's `consented_on` is the issue time when present; a missing
  /// `expires_in` falls back to [`DEFAULT_TOKEN_LIFETIME_SECS`]. A lifetime
  /// whose expiry is not a representable instant is a malformed payload.
  pub fn from_response(
    response: TokenResponse,
    received_at: DateTime<Utc>,
  ) -> std::result::Result<Self, AuthError> {
    let issued_at = response
      .consented_on
      .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
      .unwrap_or(received_at);

    let secs = response.expires_in.unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS);
    let expires_in = Duration::try_seconds(secs)
      .filter(|lifetime| issued_at.checked_add_signed(*lifetime).is_some())
      .ok_or_else(|| AuthError::MalformedPayload(format!("expires_in out of range: {}", secs)))?;

    Ok(Self::new(response.access_token, issued_at, expires_in))
  }

  pub fn access_token(&self) -> &str {
    &self.access_token
  }

  pub fn issued_at(&self) -> DateTime<Utc> {
    self.issued_at
  }

  pub fn expires_in(&self) -> Duration {
    self.expires_in
  }

  pub fn expires_at(&self) -> DateTime<Utc> {
    self.issued_at.checked_add_signed(self.expires_in).unwrap_or(DateTime::<Utc>::MAX_UTC)
  }

  /// `now - issued_at < expires_in`
  pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
    now - self.issued_at < self.expires_in
  }
}

impl std::fmt::Debug for TokenState {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("TokenState")
      .field("access_token", &"<redacted>")
      .field("issued_at", &self.issued_at)
      .field("expires_in", &self.expires_in)
      .finish()
  }
}

/// Owns the credentials and the current token, refreshing on demand.
///
/// Refreshes are serialised by `refresh_lock`, so concurrent callers on an
/// expired token wait for one authentication instead of each running their
/// own. `state` is only locked for reads and the final swap, never across a
/// request, so validity checks stay immediate during a refresh.
pub struct TokenManager {
  credentials: Credentials,
  authenticator: Authenticator,
  clock: Arc<dyn Clock>,
  state: RwLock<Option<TokenState>>,
  refresh_lock: Mutex<()>,
}

impl TokenManager {
  pub fn new(credentials: Credentials, authenticator: Authenticator, clock: Arc<dyn Clock>) -> Self {
    Self { credentials, authenticator, clock, state: RwLock::new(None), refresh_lock: Mutex::new(()) }
  }

  pub fn client_id(&self) -> &str {
    self.credentials.client_id()
  }

  /// Whether a token exists and has not expired. No side effects.
  pub async fn is_token_valid(&self) -> bool {
    let now = self.clock.now();
    self.state.read().await.as_ref().is_some_and(|token| token.is_valid_at(now))
  }

  /// When the current token expires, if there is one
  pub async fn expires_at(&self) -> Option<DateTime<Utc>> {
    self.state.read().await.as_ref().map(TokenState::expires_at)
  }

  /// Return a valid access token, authenticating first if needed
  #[instrument(skip(self))]
  pub async fn access_token(&self) -> Result<String> {
    if let Some(token) = self.current_token().await {
      return Ok(token);
    }

    let _refreshing = self.refresh_lock.lock().await;
    // another caller may have refreshed while we waited
    if let Some(token) = self.current_token().await {
      return Ok(token);
    }

    info!("Token absent or expired, authenticating");
    let fresh = self.authenticator.authenticate(&self.credentials).await?;
    let access_token = fresh.access_token().to_string();
    *self.state.write().await = Some(fresh);
    Ok(access_token)
  }

  /// Authenticate now regardless of the current token
  pub async fn refresh(&self) -> Result<()> {
    let _refreshing = self.refresh_lock.lock().await;
    let fresh = self.authenticator.authenticate(&self.credentials).await?;
    *self.state.write().await = Some(fresh);
    Ok(())
  }

  /// Forget the current token; the next request authenticates
  pub async fn invalidate(&self) {
    self.state.write().await.take();
  }

  async fn current_token(&self) -> Option<String> {
    let now = self.clock.now();
    let state = self.state.read().await;
    let token = state.as_ref().filter(|token| token.is_valid_at(now))?;
    debug!("Reusing token, expires at {}", token.expires_at());
    Some(token.access_token().to_string())
  }
}

impl std::fmt::Debug for TokenManager {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("TokenManager")
      .field("credentials", &self.credentials)
      .field("authenticator", &self.authenticator)
      .finish()
  }
}

#[cfg(test)]
pub(crate) mod test_support {
  use super::*;
  use std::sync::Mutex as StdMutex;

  /// Clock that only moves when told to
  #[derive(Debug)]
  pub struct ManualClock {
    now: StdMutex<DateTime<Utc>>,
  }

  impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
      Self { now: StdMutex::new(now) }
    }

    pub fn advance(&self, by: Duration) {
      let mut now = self.now.lock().unwrap();
      *now += by;
    }
  }

  impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
      *self.now.lock().unwrap()
    }
  }
}
