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

//! # cv-client
//!
//! A Citi Velocity charting API client with managed OAuth2 tokens.
//!
//! ## Features
//!
//! - **Managed tokens**: client-credentials exchange, refreshed lazily on expiry
//! - **Async/Await**: Built on tokio and reqwest
//! - **Validated requests**: tag counts, frequencies and dates are checked
//!   before anything touches the network
//! - **Configurable**: Environment-based configuration via cv-core
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cv_client::{CitiVelocityClient, MetadataParams, TimeseriesParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let client = CitiVelocityClient::from_env()?;
//!
//!   let tags = ["RATES.SWAP.USD.PAR.10Y", "RATES.SWAP.USD.PAR.30Y"];
//!   let series = client.timeseries(&TimeseriesParams::new(tags, "2024-01-01", "2024-06-30")).await?;
//!   let meta = client.metadata(&MetadataParams::new(tags).frequency("intraday")).await?;
//!
//!   println!("{}\n{}", series, meta);
//!   Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, cv_core::Error>`. Nothing is retried
//! internally; [`Error::is_retryable`] tells the caller whether trying again
//! could help.

#![warn(clippy::all)]

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod token;
pub mod transport;

// Re-export the main client and common types
pub use auth::Authenticator;
pub use client::CitiVelocityClient;
pub use cv_core::{AuthError, Config, Credentials, DateInput, Error, Result};
pub use cv_models::{
  CitiIdsFromPayload, CitiIdsToPayload, IdentifierQuery, MetadataPayload, TagListingPayload,
  TimeseriesPayload, TokenResponse,
};
pub use token::{Clock, SystemClock, TokenManager, TokenState};

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
  data::{DataEndpoints, MetadataParams, TimeseriesParams},
  identifiers::IdentifierEndpoints,
  tags::{TagEndpoints, TagListingParams},
};
