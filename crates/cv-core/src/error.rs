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

use thiserror::Error;

/// Failures while exchanging client credentials for a bearer token.
///
/// Transport and HTTP failures may be worth retrying; a malformed payload or
/// a missing token usually means the credentials or the endpoint are wrong.
#[derive(Error, Debug)]
pub enum AuthError {
  /// The token request never produced a response
  #[error("Authentication request failed: {0}")]
  Transport(String),

  /// The token endpoint answered with a non-2xx status
  #[error("Authentication failed: {status} - {body}")]
  Http { status: u16, body: String },

  /// The token endpoint answered with something that is not a JSON object
  #[error("Failed to parse JSON response from authentication: {0}")]
  MalformedPayload(String),

  /// The JSON response has no `access_token`
  #[error("Access token not found in response. Check your client credentials")]
  MissingAccessToken,
}

/// The main error type for cv-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Configuration error, e.g. credentials that cannot be resolved
  #[error("Configuration error: {0}")]
  Config(String),

  /// Token exchange failed
  #[error(transparent)]
  Auth(#[from] AuthError),

  /// A request was rejected locally before anything was sent
  #[error("Validation error: {0}")]
  Validation(String),

  /// A data endpoint failed, either in transport or with a non-2xx status
  #[error("Request error: {message}")]
  Request { status: Option<u16>, body: Option<String>, message: String },

  /// A successful response whose body could not be parsed
  #[error("Parse error: {0}")]
  Parse(String),

  /// HTTP client construction error
  #[error("HTTP error: {0}")]
  Http(String),
}

impl Error {
  /// Build a validation error
  pub fn validation(message: impl Into<String>) -> Self {
    Error::Validation(message.into())
  }

  /// HTTP status attached to the error, if the server answered
  pub fn status(&self) -> Option<u16> {
    match self {
      Error::Request { status, .. } => *status,
      Error::Auth(AuthError::Http { status, .. }) => Some(*status),
      _ => None,
    }
  }

  /// Whether repeating the same call might succeed.
  ///
  /// Configuration and validation problems never are.
  pub fn is_retryable(&self) -> bool {
    match self {
      Error::Request { status: None, .. } => true,
      Error::Request { status: Some(code), .. } => *code == 429 || *code >= 500,
      Error::Auth(AuthError::Transport(_)) => true,
      Error::Auth(AuthError::Http { status, .. }) => *status == 429 || *status >= 500,
      _ => false,
    }
  }
}

/// Result type alias for cv-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_display() {
    let err = Error::Request {
      status: Some(403),
      body: Some("forbidden".to_string()),
      message: "HTTP error: 403 Forbidden".to_string(),
    };
    assert!(err.to_string().contains("403"));
    assert_eq!(err.status(), Some(403));
  }

  #[test]
  fn test_auth_error_is_transparent() {
    let err: Error = AuthError::MissingAccessToken.into();
    assert!(err.to_string().contains("Access token not found"));
  }

  #[test]
  fn test_retryable_classification() {
    let transport = Error::Request { status: None, body: None, message: "timed out".to_string() };
    assert!(transport.is_retryable());

    let server = Error::Request { status: Some(503), body: None, message: String::new() };
    assert!(server.is_retryable());

    let client = Error::Request { status: Some(400), body: None, message: String::new() };
    assert!(!client.is_retryable());

    assert!(!Error::validation("too many tags").is_retryable());
    assert!(!Error::Config("missing".to_string()).is_retryable());
    assert!(!Error::from(AuthError::MissingAccessToken).is_retryable());
    assert!(Error::from(AuthError::Transport("reset".to_string())).is_retryable());
  }
}
