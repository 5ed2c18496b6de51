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

//! Request enumerations shared by the data endpoints.
//!
//! All of them parse case-insensitively and serialize in the upper-case form
//! the vendor expects.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sampling frequency for timeseries requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Frequency {
  Monthly,
  Weekly,
  #[default]
  Daily,
  Hourly,
  /// Ten minute bars
  Mi10,
  /// One minute bars
  Mi01,
}

impl Frequency {
  pub const ALL: [Frequency; 6] = [
    Frequency::Monthly,
    Frequency::Weekly,
    Frequency::Daily,
    Frequency::Hourly,
    Frequency::Mi10,
    Frequency::Mi01,
  ];

  /// Whether `startTime`/`endTime` are meaningful for this frequency
  pub fn is_intraday(&self) -> bool {
    matches!(self, Frequency::Hourly | Frequency::Mi10 | Frequency::Mi01)
  }
}

impl std::fmt::Display for Frequency {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Frequency::Monthly => write!(f, "MONTHLY"),
      Frequency::Weekly => write!(f, "WEEKLY"),
      Frequency::Daily => write!(f, "DAILY"),
      Frequency::Hourly => write!(f, "HOURLY"),
      Frequency::Mi10 => write!(f, "MI10"),
      Frequency::Mi01 => write!(f, "MI01"),
    }
  }
}

impl FromStr for Frequency {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_uppercase().as_str() {
      "MONTHLY" => Ok(Frequency::Monthly),
      "WEEKLY" => Ok(Frequency::Weekly),
      "DAILY" => Ok(Frequency::Daily),
      "HOURLY" => Ok(Frequency::Hourly),
      "MI10" => Ok(Frequency::Mi10),
      "MI01" => Ok(Frequency::Mi01),
      _ => Err(Error::validation(format!(
        "Invalid frequency '{}'. Must be one of: MONTHLY, WEEKLY, DAILY, HOURLY, MI10, MI01",
        s
      ))),
    }
  }
}

/// Frequency mode for metadata requests.
///
/// `modifiedTimes` and `endDate` are only populated by the vendor for EOD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MetadataFrequency {
  #[default]
  Eod,
  Intraday,
}

impl std::fmt::Display for MetadataFrequency {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      MetadataFrequency::Eod => write!(f, "EOD"),
      MetadataFrequency::Intraday => write!(f, "INTRADAY"),
    }
  }
}

impl FromStr for MetadataFrequency {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_uppercase().as_str() {
      "EOD" => Ok(MetadataFrequency::Eod),
      "INTRADAY" => Ok(MetadataFrequency::Intraday),
      _ => Err(Error::validation(format!(
        "Invalid metadata frequency '{}'. Must be either 'EOD' or 'INTRADAY'",
        s
      ))),
    }
  }
}

/// Price points returned per observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PricePoints {
  /// Close only
  #[default]
  #[serde(rename = "C")]
  Close,
  /// Open, high, low and close
  #[serde(rename = "OHLC")]
  Ohlc,
}

impl std::fmt::Display for PricePoints {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      PricePoints::Close => write!(f, "C"),
      PricePoints::Ohlc => write!(f, "OHLC"),
    }
  }
}

impl FromStr for PricePoints {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_uppercase().as_str() {
      "C" => Ok(PricePoints::Close),
      "OHLC" => Ok(PricePoints::Ohlc),
      _ => Err(Error::validation(format!("Invalid price points '{}'. Use 'C' or 'OHLC'", s))),
    }
  }
}
