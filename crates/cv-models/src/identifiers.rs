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

//! Identifier conversion queries

use cv_core::types::{IdentifierType, Mic, ProductType};
use serde::{Deserialize, Serialize};

/// One entry of a `/citiids/to` request.
///
/// ```
/// use cv_core::types::{IdentifierType, Mic, ProductType};
/// use cv_models::IdentifierQuery;
///
/// let by_ric = IdentifierQuery::new(ProductType::Stock, "IBM.N", IdentifierType::Ric);
/// let by_ticker = IdentifierQuery::new(ProductType::Stock, "IBM", IdentifierType::Bbt).with_mic(Mic::XNYS);
/// let primary = IdentifierQuery::new(ProductType::Stock, "IBM", IdentifierType::Bbt).primary_only(true);
/// # let _ = (by_ric, by_ticker, primary);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierQuery {
  pub product_type: ProductType,
  pub identifier: String,
  pub identifier_type: IdentifierType,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub mic: Option<Mic>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub primary_only: Option<bool>,
}

impl IdentifierQuery {
  pub fn new(
    product_type: ProductType,
    identifier: impl Into<String>,
    identifier_type: IdentifierType,
  ) -> Self {
    Self { product_type, identifier: identifier.into(), identifier_type, mic: None, primary_only: None }
  }

  /// Restrict the lookup to one venue
  pub fn with_mic(mut self, mic: Mic) -> Self {
    self.mic = Some(mic);
    self
  }

  /// Only return the primary listing
  pub fn primary_only(mut self, primary_only: bool) -> Self {
    self.primary_only = Some(primary_only);
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_optional_fields_are_omitted() {
    let query = IdentifierQuery::new(ProductType::Stock, "IBM.N", IdentifierType::Ric);
    assert_eq!(
      serde_json::to_value(&query).unwrap(),
      json!({"productType": "STOCK", "identifier": "IBM.N", "identifierType": "RIC"})
    );
  }

  #[test]
  fn test_mic_and_primary_only() {
    let query = IdentifierQuery::new(ProductType::Etf, "SPY", IdentifierType::Bbt)
      .with_mic(Mic::ARCX)
      .primary_only(true);
    assert_eq!(
      serde_json::to_value(&query).unwrap(),
      json!({
        "productType": "ETF",
        "identifier": "SPY",
        "identifierType": "BBT",
        "mic": "ARCX",
        "primaryOnly": true
      })
    );
  }
}
