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

//! Market identifier codes (ISO 10383) accepted by the Citi ID lookup.
//!
//! Only stocks and ETFs resolve reliably when a MIC is supplied.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Exchanges the identifier lookup understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mic {
  /// NYSE Arca
  ARCX,
  /// Euronext Amsterdam
  XAMS,
  /// NYSE American
  XASE,
  /// Australian Securities Exchange
  XASX,
  /// Euronext Brussels
  XBRU,
  /// Nasdaq Copenhagen
  XCSE,
  /// Xetra
  XETR,
  /// Frankfurt Stock Exchange
  XFRA,
  /// Nasdaq Helsinki
  XHEL,
  /// Hong Kong Exchanges
  XHKG,
  /// Japan Exchange Group
  XJPX,
  /// Euronext Lisbon
  XLIS,
  /// London Stock Exchange
  XLON,
  /// Nasdaq (all markets)
  XNAS,
  /// Nasdaq Capital Market
  XNCM,
  /// Nasdaq Global Select Market
  XNGS,
  /// Nasdaq Global Market
  XNMS,
  /// New York Stock Exchange
  XNYS,
  /// Euronext Paris
  XPAR,
  /// Nasdaq Stockholm
  XSTO,
  /// Tokyo Stock Exchange
  XTKS,
}

impl Mic {
  pub const ALL: [Mic; 21] = [
    Mic::ARCX,
    Mic::XAMS,
    Mic::XASE,
    Mic::XASX,
    Mic::XBRU,
    Mic::XCSE,
    Mic::XETR,
    Mic::XFRA,
    Mic::XHEL,
    Mic::XHKG,
    Mic::XJPX,
    Mic::XLIS,
    Mic::XLON,
    Mic::XNAS,
    Mic::XNCM,
    Mic::XNGS,
    Mic::XNMS,
    Mic::XNYS,
    Mic::XPAR,
    Mic::XSTO,
    Mic::XTKS,
  ];

  /// The four letter code
  pub fn code(&self) -> &'static str {
    match self {
      Mic::ARCX => "ARCX",
      Mic::XAMS => "XAMS",
      Mic::XASE => "XASE",
      Mic::XASX => "XASX",
      Mic::XBRU => "XBRU",
      Mic::XCSE => "XCSE",
      Mic::XETR => "XETR",
      Mic::XFRA => "XFRA",
      Mic::XHEL => "XHEL",
      Mic::XHKG => "XHKG",
      Mic::XJPX => "XJPX",
      Mic::XLIS => "XLIS",
      Mic::XLON => "XLON",
      Mic::XNAS => "XNAS",
      Mic::XNCM => "XNCM",
      Mic::XNGS => "XNGS",
      Mic::XNMS => "XNMS",
      Mic::XNYS => "XNYS",
      Mic::XPAR => "XPAR",
      Mic::XSTO => "XSTO",
      Mic::XTKS => "XTKS",
    }
  }

  /// Get the full name of the venue
  pub fn full_name(&self) -> &'static str {
    match self {
      Mic::ARCX => "NYSE Arca",
      Mic::XAMS => "Euronext Amsterdam",
      Mic::XASE => "NYSE American",
      Mic::XASX => "Australian Securities Exchange",
      Mic::XBRU => "Euronext Brussels",
      Mic::XCSE => "Nasdaq Copenhagen",
      Mic::XETR => "Xetra",
      Mic::XFRA => "Frankfurt Stock Exchange",
      Mic::XHEL => "Nasdaq Helsinki",
      Mic::XHKG => "Hong Kong Exchanges and Clearing",
      Mic::XJPX => "Japan Exchange Group",
      Mic::XLIS => "Euronext Lisbon",
      Mic::XLON => "London Stock Exchange",
      Mic::XNAS => "Nasdaq",
      Mic::XNCM => "Nasdaq Capital Market",
      Mic::XNGS => "Nasdaq Global Select Market",
      Mic::XNMS => "Nasdaq Global Market",
      Mic::XNYS => "New York Stock Exchange",
      Mic::XPAR => "Euronext Paris",
      Mic::XSTO => "Nasdaq Stockholm",
      Mic::XTKS => "Tokyo Stock Exchange",
    }
  }
}

impl std::fmt::Display for Mic {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.code())
  }
}

impl FromStr for Mic {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let wanted = s.trim().to_uppercase();
    Mic::ALL
      .into_iter()
      .find(|mic| mic.code() == wanted)
      .ok_or_else(|| Error::validation(format!("Unsupported MIC '{}'", s)))
  }
}
