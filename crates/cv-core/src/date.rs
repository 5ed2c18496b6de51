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

//! Date inputs accepted by the timeseries endpoint.
//!
//! The vendor wants dates as `YYYYMMDD` integers. Callers may hand us a
//! calendar date, a date-time, an integer or a string such as `2022-01-01`
//! or `2022/01/01`.

use crate::error::{Error, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone};

/// A date as supplied by the caller, before normalisation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
  Date(NaiveDate),
  Text(String),
  Int(u32),
}

impl DateInput {
  /// Normalise to a `YYYYMMDD` integer.
  ///
  /// Strings are stripped of `-` and `/` separators first. The result must
  /// name a real calendar day.
  pub fn to_yyyymmdd(&self) -> Result<u32> {
    match self {
      DateInput::Date(date) => from_date(date),
      DateInput::Int(value) => check_yyyymmdd(*value, &value.to_string()),
      DateInput::Text(text) => {
        let digits: String = text.trim().chars().filter(|c| *c != '-' && *c != '/').collect();
        if digits.len() != 8 {
          return Err(invalid(text));
        }
        let value = digits.parse::<u32>().map_err(|_| invalid(text))?;
        check_yyyymmdd(value, text)
      }
    }
  }
}

fn from_date(date: &NaiveDate) -> Result<u32> {
  let year = u32::try_from(date.year())
    .ok()
    .filter(|year| (1000..=9999).contains(year))
    .ok_or_else(|| invalid(&date.to_string()))?;
  Ok(year * 10_000 + date.month() * 100 + date.day())
}

fn check_yyyymmdd(value: u32, original: &str) -> Result<u32> {
  let (year, month, day) = (value / 10_000, (value / 100) % 100, value % 100);
  if !(1000..=9999).contains(&year) {
    return Err(invalid(original));
  }
  NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(|| invalid(original))?;
  Ok(value)
}

fn invalid(original: &str) -> Error {
  Error::validation(format!(
    "Invalid date format: {}. Use YYYYMMDD or a date/datetime value",
    original
  ))
}

impl From<NaiveDate> for DateInput {
  fn from(date: NaiveDate) -> Self {
    DateInput::Date(date)
  }
}

impl From<NaiveDateTime> for DateInput {
  fn from(datetime: NaiveDateTime) -> Self {
    DateInput::Date(datetime.date())
  }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
  fn from(datetime: DateTime<Tz>) -> Self {
    DateInput::Date(datetime.date_naive())
  }
}

impl From<&str> for DateInput {
  fn from(text: &str) -> Self {
    DateInput::Text(text.to_string())
  }
}

impl From<String> for DateInput {
  fn from(text: String) -> Self {
    DateInput::Text(text)
  }
}

impl From<u32> for DateInput {
  fn from(value: u32) -> Self {
    DateInput::Int(value)
  }
}
