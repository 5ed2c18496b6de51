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

//! Citi ID conversion endpoints
//!
//! - `/citiids/to`: RIC, BBT, ETS or ISIN to Citi IDs
//! - `/citiids/from`: Citi IDs back to RIC, MIC, ETS, BBT and ISIN

use super::{impl_endpoint_base, EndpointBase};
use crate::token::TokenManager;
use crate::transport::Transport;
use cv_core::{Endpoint, Error, Result};
use cv_models::{CitiIdsFromPayload, CitiIdsToPayload, IdentifierQuery};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// Identifier conversion endpoints
pub struct IdentifierEndpoints {
  transport: Arc<Transport>,
  tokens: Arc<TokenManager>,
}

impl_endpoint_base!(IdentifierEndpoints);

impl IdentifierEndpoints {
  /// Create a new identifier endpoints instance
  pub fn new(transport: Arc<Transport>, tokens: Arc<TokenManager>) -> Self {
    Self { transport, tokens }
  }

  /// Convert external identifiers to Citi IDs
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use cv_client::CitiVelocityClient;
  /// # use cv_core::types::{IdentifierType, Mic, ProductType};
  /// # use cv_models::IdentifierQuery;
  /// # async fn run(client: CitiVelocityClient) -> cv_core::Result<()> {
  /// let queries = vec![
  ///   IdentifierQuery::new(ProductType::Stock, "IBM.N", IdentifierType::Ric),
  ///   IdentifierQuery::new(ProductType::Stock, "IBM", IdentifierType::Bbt).with_mic(Mic::XNYS),
  ///   IdentifierQuery::new(ProductType::Stock, "IBM", IdentifierType::Bbt).primary_only(true),
  /// ];
  /// let ids = client.identifiers().citi_ids(&queries).await?;
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, queries), fields(queries = queries.len()))]
  pub async fn citi_ids(&self, queries: &[IdentifierQuery]) -> Result<Value> {
    if queries.is_empty() {
      return Err(Error::validation("At least one identifier query is required"));
    }
    let payload = CitiIdsToPayload { queries: queries.to_vec() };
    self.send(Endpoint::CitiIdsTo, &payload).await
  }

  /// Convert Citi IDs to the other identifier schemes
  #[instrument(skip(self, citi_ids), fields(ids = citi_ids.len()))]
  pub async fn identifier_info(&self, citi_ids: &[u64]) -> Result<Value> {
    if citi_ids.is_empty() {
      return Err(Error::validation("At least one Citi ID is required"));
    }
    let payload = CitiIdsFromPayload { ids: citi_ids.to_vec() };
    self.send(Endpoint::CitiIdsFrom, &payload).await
  }
}
