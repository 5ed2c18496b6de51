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

//! Tag discovery endpoint

use super::{impl_endpoint_base, EndpointBase};
use crate::token::TokenManager;
use crate::transport::Transport;
use cv_core::{Endpoint, Error, Result};
use cv_models::TagListingPayload;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// Parameters of a tag listing request.
///
/// The prefix is `category.sub_category` followed by any extra parts, all
/// joined with dots. An optional regex filters the results server-side.
#[derive(Debug, Clone)]
pub struct TagListingParams {
  category: String,
  sub_category: String,
  parts: Vec<String>,
  regex: Option<String>,
}

impl TagListingParams {
  pub fn new(category: impl Into<String>, sub_category: impl Into<String>) -> Self {
    Self { category: category.into(), sub_category: sub_category.into(), parts: Vec::new(), regex: None }
  }

  /// Append one more prefix part
  pub fn part(mut self, part: impl Into<String>) -> Self {
    self.parts.push(part.into());
    self
  }

  /// Append several prefix parts
  pub fn parts<I, S>(mut self, parts: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.parts.extend(parts.into_iter().map(Into::into));
    self
  }

  /// Filter results with a regex
  pub fn regex(mut self, pattern: impl Into<String>) -> Self {
    self.regex = Some(pattern.into());
    self
  }

  /// The dot-joined prefix
  pub fn prefix(&self) -> String {
    let mut prefix_parts = vec![self.category.as_str(), self.sub_category.as_str()];
    prefix_parts.extend(self.parts.iter().map(String::as_str));
    prefix_parts.join(".")
  }

  /// Validate into the wire body. Makes no network calls.
  pub fn build(&self) -> Result<TagListingPayload> {
    if self.category.trim().is_empty() || self.sub_category.trim().is_empty() {
      return Err(Error::validation("Tag listing needs a category and a sub-category"));
    }
    if self.parts.iter().any(|p| p.trim().is_empty()) {
      return Err(Error::validation("Tag listing prefix parts must not be empty"));
    }

    Ok(TagListingPayload {
      prefix: self.prefix(),
      regex: self.regex.clone().filter(|r| !r.is_empty()),
    })
  }
}

/// Tag discovery endpoints
pub struct TagEndpoints {
  transport: Arc<Transport>,
  tokens: Arc<TokenManager>,
}

impl_endpoint_base!(TagEndpoints);

impl TagEndpoints {
  /// Create a new tag endpoints instance
  pub fn new(transport: Arc<Transport>, tokens: Arc<TokenManager>) -> Self {
    Self { transport, tokens }
  }

  /// List tags under a prefix
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use cv_client::{CitiVelocityClient, TagListingParams};
  /// # async fn run(client: CitiVelocityClient) -> cv_core::Result<()> {
  /// let params = TagListingParams::new("EQUITY", "DELTAONE").part("SPX").regex(".*DIVIDEND.*");
  /// let tags = client.tags().tag_listing(&params).await?;
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, params), fields(prefix = %params.prefix()))]
  pub async fn tag_listing(&self, params: &TagListingParams) -> Result<Value> {
    let payload = params.build()?;
    self.send(Endpoint::TagListing, &payload).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_prefix_joins_parts() {
    let params = TagListingParams::new("EQUITY", "DELTAONE").parts(["SPX", "INDEX"]);
    assert_eq!(params.prefix(), "EQUITY.DELTAONE.SPX.INDEX");

    let payload = params.build().unwrap();
    assert_eq!(payload.prefix, "EQUITY.DELTAONE.SPX.INDEX");
    assert_eq!(payload.regex, None);
  }

  #[test]
  fn test_regex_is_forwarded() {
    let payload = TagListingParams::new("RATES", "VOL").regex("USD.*").build().unwrap();
    assert_eq!(payload.regex.as_deref(), Some("USD.*"));
  }

  #[test]
  fn test_empty_parts_are_rejected() {
    assert!(matches!(TagListingParams::new("", "VOL").build(), Err(Error::Validation(_))));
    assert!(matches!(TagListingParams::new("RATES", " ").build(), Err(Error::Validation(_))));
    assert!(TagListingParams::new("RATES", "VOL").part("").build().is_err());
  }
}
