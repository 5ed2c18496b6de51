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

//! OAuth2 client-credentials token response

use serde::{Deserialize, Deserializer, Serialize};

/// Body returned by the token endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
  /// Bearer token for the data endpoints
  pub access_token: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub token_type: Option<String>,

  /// Lifetime in seconds
  #[serde(default, deserialize_with = "lenient_i64", skip_serializing_if = "Option::is_none")]
  pub expires_in: Option<i64>,

  /// Issue time as epoch seconds
  #[serde(default, deserialize_with = "lenient_i64", skip_serializing_if = "Option::is_none")]
  pub consented_on: Option<i64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub scope: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
  Int(i64),
  Float(f64),
  Text(String),
  Other(serde::de::IgnoredAny),
}

/// Accept `3600`, `3600.0` or `"3600"`; anything else becomes `None`
fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<NumberOrString>::deserialize(deserializer)?;
  Ok(match value {
    Some(NumberOrString::Int(v)) => Some(v),
    Some(NumberOrString::Float(v)) => Some(v as i64),
    Some(NumberOrString::Text(s)) => s.trim().parse().ok(),
    Some(NumberOrString::Other(_)) | None => None,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_full_token_response() {
    let json = r#"{
      "token_type": "bearer",
      "access_token": "abc123",
      "expires_in": 3600,
      "consented_on": 1700000000,
      "scope": "/api"
    }"#;
    let token: TokenResponse = serde_json::from_str(json).unwrap();
    assert_eq!(token.access_token, "abc123");
    assert_eq!(token.expires_in, Some(3600));
    assert_eq!(token.consented_on, Some(1700000000));
  }

  #[test]
  fn test_string_numbers_are_accepted() {
    let json = r#"{"access_token": "abc", "expires_in": "1800", "consented_on": null}"#;
    let token: TokenResponse = serde_json::from_str(json).unwrap();
    assert_eq!(token.expires_in, Some(1800));
    assert_eq!(token.consented_on, None);
  }

  #[test]
  fn test_minimal_token_response() {
    let token: TokenResponse = serde_json::from_str(r#"{"access_token": "abc"}"#).unwrap();
    assert_eq!(token.expires_in, None);
    assert_eq!(token.token_type, None);
  }
}
