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

//! # cv-core
//!
//! Core types shared by the Citi Velocity crates: configuration, the error
//! taxonomy, the endpoint catalogue and the enumerations the vendor accepts.

pub mod config;
pub mod date;
pub mod error;
pub mod tag_params;
pub mod types;

pub use config::{Config, Credentials};
pub use date::DateInput;
pub use error::{AuthError, Error, Result};

/// The Citi Velocity operations supported by this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
  /// OAuth2 client-credentials token exchange
  Token,
  /// Timeseries data
  Data,
  /// Tag metadata
  Metadata,
  /// Tag discovery
  TagListing,
  /// External identifiers to Citi IDs
  CitiIdsTo,
  /// Citi IDs to external identifiers
  CitiIdsFrom,
}

impl Endpoint {
  /// Path suffix appended to the data base URL.
  ///
  /// The token endpoint lives on a different host path and has no suffix.
  pub fn path(&self) -> &'static str {
    match self {
      Endpoint::Token => "",
      Endpoint::Data => "/data",
      Endpoint::Metadata => "/metadata",
      Endpoint::TagListing => "/taglisting",
      Endpoint::CitiIdsTo => "/citiids/to",
      Endpoint::CitiIdsFrom => "/citiids/from",
    }
  }

  /// Whether requests to this endpoint carry a bearer token and `client_id`.
  pub fn is_authed(&self) -> bool {
    !matches!(self, Endpoint::Token)
  }
}

impl std::fmt::Display for Endpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Endpoint::Token => write!(f, "oauth2/token"),
      Endpoint::Data => write!(f, "data"),
      Endpoint::Metadata => write!(f, "metadata"),
      Endpoint::TagListing => write!(f, "taglisting"),
      Endpoint::CitiIdsTo => write!(f, "citiids/to"),
      Endpoint::CitiIdsFrom => write!(f, "citiids/from"),
    }
  }
}

/// OAuth2 token endpoint
pub const CITI_VELOCITY_TOKEN_URL: &str = "https://api.citivelocity.com/markets/cv/api/oauth2/token";

/// Base URL for the authenticated charting endpoints
pub const CITI_VELOCITY_BASE_URL: &str =
  "https://api.citivelocity.com/markets/analytics/chartingbe/rest/external/authed";

/// Scope requested during authentication
pub const TOKEN_SCOPE: &str = "/api";

/// Lifetime assumed when the token response omits `expires_in`
pub const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 3600;

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Tag limits per request
pub const MAX_TIMESERIES_TAGS: usize = 100;
pub const MAX_METADATA_TAGS: usize = 1000;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_endpoint_paths() {
    assert_eq!(Endpoint::Data.path(), "/data");
    assert_eq!(Endpoint::CitiIdsTo.path(), "/citiids/to");
    assert_eq!(Endpoint::CitiIdsFrom.path(), "/citiids/from");
    assert!(!Endpoint::Token.is_authed());
    assert!(Endpoint::TagListing.is_authed());
  }

  #[test]
  fn test_endpoint_display() {
    assert_eq!(Endpoint::Metadata.to_string(), "metadata");
    assert_eq!(Endpoint::Token.to_string(), "oauth2/token");
  }
}
