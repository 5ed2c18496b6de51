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

//! JSON bodies of the authenticated endpoints.
//!
//! These are the already-validated wire forms; the client crate builds them
//! from caller parameters.

use crate::identifiers::IdentifierQuery;
use cv_core::types::{Frequency, MetadataFrequency, PricePoints};
use serde::{Deserialize, Serialize};

/// Body of `/data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeseriesPayload {
  pub tags: Vec<String>,

  /// `YYYYMMDD`
  pub start_date: u32,

  /// `YYYYMMDD`
  pub end_date: u32,

  pub frequency: Frequency,
  pub price_points: PricePoints,
  pub latest_only: bool,

  /// `HHMM`, intraday frequencies only
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub start_time: Option<u32>,

  /// `HHMM`, intraday frequencies only
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub end_time: Option<u32>,
}

/// Body of `/metadata`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataPayload {
  pub tags: Vec<String>,
  pub frequency: MetadataFrequency,
}

/// Body of `/taglisting`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagListingPayload {
  /// Dot-joined category path, e.g. `EQUITY.DELTAONE`
  pub prefix: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub regex: Option<String>,
}

/// Body of `/citiids/to`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitiIdsToPayload {
  pub queries: Vec<IdentifierQuery>,
}

/// Body of `/citiids/from`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitiIdsFromPayload {
  pub ids: Vec<u64>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_timeseries_payload_shape() {
    let payload = TimeseriesPayload {
      tags: vec!["COMMODITIES.SPOT.SPOT_GOLD".to_string()],
      start_date: 20220101,
      end_date: 20220131,
      frequency: Frequency::Daily,
      price_points: PricePoints::Close,
      latest_only: false,
      start_time: None,
      end_time: None,
    };

    assert_eq!(
      serde_json::to_value(&payload).unwrap(),
      json!({
        "tags": ["COMMODITIES.SPOT.SPOT_GOLD"],
        "startDate": 20220101,
        "endDate": 20220131,
        "frequency": "DAILY",
        "pricePoints": "C",
        "latestOnly": false
      })
    );
  }

  #[test]
  fn test_intraday_times_are_included() {
    let payload = TimeseriesPayload {
      tags: vec!["FX.SPOT.EUR.USD.CITI".to_string()],
      start_date: 20240102,
      end_date: 20240102,
      frequency: Frequency::Mi10,
      price_points: PricePoints::Ohlc,
      latest_only: true,
      start_time: Some(930),
      end_time: Some(1600),
    };

    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["startTime"], 930);
    assert_eq!(value["endTime"], 1600);
    assert_eq!(value["frequency"], "MI10");
    assert_eq!(value["pricePoints"], "OHLC");
  }

  #[test]
  fn test_tag_listing_without_regex() {
    let payload = TagListingPayload { prefix: "EQUITY.DELTAONE".to_string(), regex: None };
    assert_eq!(serde_json::to_value(&payload).unwrap(), json!({"prefix": "EQUITY.DELTAONE"}));
  }
}
