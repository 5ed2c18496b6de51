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

pub mod data;
pub mod identifiers;
pub mod tags;

use crate::token::TokenManager;
use crate::transport::Transport;
use cv_core::{Endpoint, Result};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Base trait for endpoint implementations
///
/// Provides the authenticated send shared by all endpoint modules. Callers
/// validate their parameters before calling [`EndpointBase::send`], so a
/// rejected request never costs a token exchange.
#[allow(async_fn_in_trait)]
pub trait EndpointBase {
  /// Get a reference to the transport layer
  fn transport(&self) -> &Arc<Transport>;

  /// Get a reference to the token manager
  fn tokens(&self) -> &Arc<TokenManager>;

  /// Ensure a valid token, then POST `body` to `endpoint`
  async fn send<B>(&self, endpoint: Endpoint, body: &B) -> Result<Value>
  where
    B: Serialize + Sync,
  {
    let access_token = self.tokens().access_token().await?;
    self.transport().post_json(endpoint, &access_token, self.tokens().client_id(), body).await
  }
}

/// Macro to implement the EndpointBase trait for endpoint structs
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl $crate::endpoints::EndpointBase for $struct_name {
      fn transport(&self) -> &std::sync::Arc<$crate::transport::Transport> {
        &self.transport
      }

      fn tokens(&self) -> &std::sync::Arc<$crate::token::TokenManager> {
        &self.tokens
      }
    }
  };
}

pub(crate) use impl_endpoint_base;

/// Reject empty or oversized tag lists
pub(crate) fn check_tag_count(tags: &[String], max: usize) -> Result<()> {
  if tags.is_empty() || tags.len() > max {
    return Err(cv_core::Error::validation(format!(
      "Tags list must contain between 1 and {} items, got {}",
      max,
      tags.len()
    )));
  }
  Ok(())
}
