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

//! Timeseries and metadata endpoints
//!
//! - `/data`: observations for 1 to 100 tags over a date range
//! - `/metadata`: descriptive fields for 1 to 1000 tags

use super::{check_tag_count, impl_endpoint_base, EndpointBase};
use crate::token::TokenManager;
use crate::transport::Transport;
use cv_core::types::{Frequency, MetadataFrequency, PricePoints};
use cv_core::{DateInput, Endpoint, Error, Result, MAX_METADATA_TAGS, MAX_TIMESERIES_TAGS};
use cv_models::{MetadataPayload, TimeseriesPayload};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// Parameters of a timeseries request.
///
/// Frequency and price points are kept as given and upper-cased when the
/// request is built, so `"daily"` is accepted and sent as `DAILY`.
///
/// ```
/// use cv_client::TimeseriesParams;
///
/// let params = TimeseriesParams::new(["COMMODITIES.SPOT.SPOT_GOLD"], "2022-01-01", "2022/12/31")
///   .frequency("weekly")
///   .price_points("ohlc");
/// let payload = params.build().unwrap();
/// assert_eq!(payload.start_date, 20220101);
/// ```
#[derive(Debug, Clone)]
pub struct TimeseriesParams {
  tags: Vec<String>,
  start_date: DateInput,
  end_date: DateInput,
  frequency: String,
  price_points: String,
  latest_only: bool,
  start_time: Option<u32>,
  end_time: Option<u32>,
}

impl TimeseriesParams {
  pub fn new<I, S>(tags: I, start_date: impl Into<DateInput>, end_date: impl Into<DateInput>) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      tags: tags.into_iter().map(Into::into).collect(),
      start_date: start_date.into(),
      end_date: end_date.into(),
      frequency: Frequency::default().to_string(),
      price_points: PricePoints::default().to_string(),
      latest_only: false,
      start_time: None,
      end_time: None,
    }
  }

  /// One of MONTHLY, WEEKLY, DAILY, HOURLY, MI10, MI01 (any case)
  pub fn frequency(mut self, frequency: impl Into<String>) -> Self {
    self.frequency = frequency.into();
    self
  }

  /// `C` for close only, `OHLC` for open/high/low/close
  pub fn price_points(mut self, price_points: impl Into<String>) -> Self {
    self.price_points = price_points.into();
    self
  }

  /// Only return the most recent observation
  pub fn latest_only(mut self, latest_only: bool) -> Self {
    self.latest_only = latest_only;
    self
  }

  /// Start time as `HHMM`, for intraday frequencies
  pub fn start_time(mut self, hhmm: u32) -> Self {
    self.start_time = Some(hhmm);
    self
  }

  /// End time as `HHMM`, for intraday frequencies
  pub fn end_time(mut self, hhmm: u32) -> Self {
    self.end_time = Some(hhmm);
    self
  }

  /// Validate and normalise into the wire body. Makes no network calls.
  pub fn build(&self) -> Result<TimeseriesPayload> {
    check_tag_count(&self.tags, MAX_TIMESERIES_TAGS)?;

    let frequency: Frequency = self.frequency.parse()?;
    let price_points: PricePoints = self.price_points.parse()?;
    let start_date = self.start_date.to_yyyymmdd()?;
    let end_date = self.end_date.to_yyyymmdd()?;

    if let Some(hhmm) = self.start_time {
      check_hhmm("start_time", hhmm)?;
    }
    if let Some(hhmm) = self.end_time {
      check_hhmm("end_time", hhmm)?;
    }

    Ok(TimeseriesPayload {
      tags: self.tags.clone(),
      start_date,
      end_date,
      frequency,
      price_points,
      latest_only: self.latest_only,
      start_time: self.start_time,
      end_time: self.end_time,
    })
  }
}

fn check_hhmm(name: &str, hhmm: u32) -> Result<()> {
  if hhmm / 100 > 23 || hhmm % 100 > 59 {
    return Err(Error::validation(format!("Invalid {}: {}. Use HHMM", name, hhmm)));
  }
  Ok(())
}

/// Parameters of a metadata request
#[derive(Debug, Clone)]
pub struct MetadataParams {
  tags: Vec<String>,
  frequency: String,
}

impl MetadataParams {
  pub fn new<I, S>(tags: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      tags: tags.into_iter().map(Into::into).collect(),
      frequency: MetadataFrequency::default().to_string(),
    }
  }

  /// `EOD` (default) or `INTRADAY`, any case.
  ///
  /// `modifiedTimes` and `endDate` only appear in EOD responses.
  pub fn frequency(mut self, frequency: impl Into<String>) -> Self {
    self.frequency = frequency.into();
    self
  }

  /// Validate into the wire body. Makes no network calls.
  pub fn build(&self) -> Result<MetadataPayload> {
    check_tag_count(&self.tags, MAX_METADATA_TAGS)?;
    let frequency: MetadataFrequency = self.frequency.parse()?;
    Ok(MetadataPayload { tags: self.tags.clone(), frequency })
  }
}

/// Timeseries and metadata endpoints
pub struct DataEndpoints {
  transport: Arc<Transport>,
  tokens: Arc<TokenManager>,
}

impl_endpoint_base!(DataEndpoints);

impl DataEndpoints {
  /// Create a new data endpoints instance
  pub fn new(transport: Arc<Transport>, tokens: Arc<TokenManager>) -> Self {
    Self { transport, tokens }
  }

  /// Fetch timeseries data.
  ///
  /// # Errors
  ///
  /// [`Error::Validation`] for 0 or more than 100 tags, an unknown frequency
  /// or price point, or an unparseable date. Nothing is sent in that case.
  #[instrument(skip(self, params), fields(tags = params.tags.len(), frequency = %params.frequency))]
  pub async fn timeseries(&self, params: &TimeseriesParams) -> Result<Value> {
    let payload = params.build()?;
    self.send(Endpoint::Data, &payload).await
  }

  /// Fetch metadata for the given tags.
  ///
  /// The response is passed through as-is; INTRADAY answers lack the
  /// EOD-only fields.
  #[instrument(skip(self, params), fields(tags = params.tags.len(), frequency = %params.frequency))]
  pub async fn metadata(&self, params: &MetadataParams) -> Result<Value> {
    let payload = params.build()?;
    self.send(Endpoint::Metadata, &payload).await
  }
}
