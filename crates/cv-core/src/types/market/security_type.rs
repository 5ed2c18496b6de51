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

//! Product and identifier schemes for Citi ID conversion.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of instrument being looked up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductType {
  Stock,
  Etf,
  Index,
}

impl std::fmt::Display for ProductType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ProductType::Stock => write!(f, "STOCK"),
      ProductType::Etf => write!(f, "ETF"),
      ProductType::Index => write!(f, "INDEX"),
    }
  }
}

impl FromStr for ProductType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_uppercase().as_str() {
      "STOCK" => Ok(ProductType::Stock),
      "ETF" => Ok(ProductType::Etf),
      "INDEX" => Ok(ProductType::Index),
      _ => Err(Error::validation(format!(
        "Invalid product type '{}'. Must be one of: STOCK, ETF, INDEX",
        s
      ))),
    }
  }
}

/// External identifier scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IdentifierType {
  /// Reuters instrument code, e.g. `IBM.N`
  Ric,
  /// Bloomberg ticker
  Bbt,
  /// Exchange ticker symbol
  Ets,
  Isin,
}

impl std::fmt::Display for IdentifierType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      IdentifierType::Ric => write!(f, "RIC"),
      IdentifierType::Bbt => write!(f, "BBT"),
      IdentifierType::Ets => write!(f, "ETS"),
      IdentifierType::Isin => write!(f, "ISIN"),
    }
  }
}

impl FromStr for IdentifierType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_uppercase().as_str() {
      "RIC" => Ok(IdentifierType::Ric),
      "BBT" => Ok(IdentifierType::Bbt),
      "ETS" => Ok(IdentifierType::Ets),
      "ISIN" => Ok(IdentifierType::Isin),
      _ => Err(Error::validation(format!(
        "Invalid identifier type '{}'. Must be one of: RIC, BBT, ETS, ISIN",
        s
      ))),
    }
  }
}
