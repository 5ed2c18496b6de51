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

//! OAuth2 client-credentials exchange

use crate::token::{Clock, TokenState};
use crate::transport::{snippet, Transport};
use cv_core::{AuthError, Credentials, Result, TOKEN_SCOPE};
use cv_models::TokenResponse;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Exchanges client credentials for bearer tokens.
///
/// Stateless: each call is a single request and the resulting
/// [`TokenState`] belongs to the caller.
pub struct Authenticator {
  transport: Arc<Transport>,
  clock: Arc<dyn Clock>,
}

impl Authenticator {
  pub fn new(transport: Arc<Transport>, clock: Arc<dyn Clock>) -> Self {
    Self { transport, clock }
  }

  /// Request a fresh token.
  ///
  /// # Errors
  ///
  /// * [`AuthError::Transport`] if no response arrived
  /// * [`AuthError::Http`] on a non-2xx status
  /// * [`AuthError::MalformedPayload`] if the body is not a JSON object
  /// * [`AuthError::MissingAccessToken`] if `access_token` is absent
  #[instrument(skip(self, credentials), fields(client_id = %credentials.client_id()))]
  pub async fn authenticate(&self, credentials: &Credentials) -> Result<TokenState> {
    let form = [
      ("client_id", credentials.client_id()),
      ("client_secret", credentials.client_secret()),
      ("grant_type", "client_credentials"),
      ("scope", TOKEN_SCOPE),
    ];

    let response = self.transport.post_form(&form).await.map_err(|e| {
      error!("Authentication request failed: {}", e);
      AuthError::Transport(e.to_string())
    })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| AuthError::Transport(e.to_string()))?;

    if !status.is_success() {
      error!("Authentication failed with status: {}", status);
      return Err(AuthError::Http { status: status.as_u16(), body }.into());
    }

    let token = parse_token_response(&body)?;
    let state = TokenState::from_response(token, self.clock.now())?;
    info!("Authenticated, token valid until {}", state.expires_at());
    Ok(state)
  }
}

fn parse_token_response(body: &str) -> std::result::Result<TokenResponse, AuthError> {
  let value: Value = serde_json::from_str(body)
    .map_err(|e| AuthError::MalformedPayload(format!("{}. Response: {}", e, snippet(body))))?;

  let object = value
    .as_object()
    .ok_or_else(|| AuthError::MalformedPayload(format!("expected a JSON object, got {}", snippet(body))))?;

  match object.get("access_token") {
    Some(Value::String(token)) if !token.is_empty() => {}
    _ => return Err(AuthError::MissingAccessToken),
  }

  debug!("Token response fields: {:?}", object.keys().collect::<Vec<_>>());
  serde_json::from_value(value).map_err(|e| AuthError::MalformedPayload(e.to_string()))
}

impl std::fmt::Debug for Authenticator {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Authenticator").field("token_url", &self.transport.token_url()).finish()
  }
}
