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

//! Reference values used when building equity and rates volatility tags.
//!
//! These are lookup tables only; tags themselves are passed to the vendor
//! untouched.

pub const EQ_VOL_PRODUCT_TYPES: &[&str] = &["ETF", "Indices", "Stocks", "Index Correlation"];

pub const EQ_VOL_TYPES: &[&str] = &["Spot Moneyness", "Forward Moneyness", "Delta", "Realized"];

/// Moneyness strikes in percent of spot/forward
pub const MONEYNESS_STRIKES: &[f64] = &[
  20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0, 75.0, 80.0, 82.5, 85.0, 87.5,
  90.0, 92.5, 95.0, 97.5, 100.0, 102.5, 105.0, 107.5, 110.0, 112.5, 115.0, 117.5, 120.0, 125.0,
  130.0, 135.0, 140.0, 145.0, 150.0, 155.0, 160.0, 165.0, 170.0, 175.0, 180.0, 185.0, 190.0,
  195.0, 200.0,
];

pub const DELTA_STRIKES: &[&str] =
  &["M1", "M5", "M10", "M25", "M50", "M75", "C75", "C50", "C25", "C10", "C5", "C1"];

pub const EQ_VOL_TENORS: &[&str] =
  &["1W", "2W", "1M", "2M", "3M", "4M", "5M", "6M", "7M", "8M", "9M", "1Y", "2Y", "3Y"];

pub const RATES_VOL_CCY: &[&str] =
  &["USD", "EUR", "GBP", "JPY", "CHF", "AUD", "KRW", "NZD", "NOK", "SEK", "DKK"];

pub const RATES_VOL_CAT: &[&str] = &["ATM_RFR"];

pub const RATES_VOL_EXPIRY: &[&str] = &[
  "1M", "2M", "3M", "6M", "9M", "1Y", "18M", "2Y", "3Y", "4Y", "5Y", "7Y", "10Y", "12Y", "15Y",
  "20Y", "30Y",
];

pub const RATES_VOL_TENORS: &[&str] = &["3M", "1Y", "2Y", "3Y", "5Y", "7Y", "10Y", "15Y", "20Y", "30Y"];

/// Whether `tenor` is a listed equity vol tenor
pub fn is_eq_vol_tenor(tenor: &str) -> bool {
  EQ_VOL_TENORS.contains(&tenor)
}

/// Whether `strike` is a listed moneyness strike
pub fn is_moneyness_strike(strike: f64) -> bool {
  MONEYNESS_STRIKES.iter().any(|s| (s - strike).abs() < f64::EPSILON)
}

/// Tag-friendly rendering of a moneyness strike: `100` or `82.5`
pub fn format_strike(strike: f64) -> String {
  if strike.fract() == 0.0 {
    format!("{}", strike as i64)
  } else {
    format!("{}", strike)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_strikes_are_sorted_and_unique() {
    assert!(MONEYNESS_STRIKES.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(MONEYNESS_STRIKES.len(), 45);
    assert!(is_moneyness_strike(82.5));
    assert!(!is_moneyness_strike(81.0));
  }

  #[test]
  fn test_rates_expiries_are_separate_entries() {
    assert!(RATES_VOL_EXPIRY.contains(&"18M"));
    assert!(RATES_VOL_EXPIRY.contains(&"2Y"));
    assert_eq!(RATES_VOL_EXPIRY.len(), 17);
  }

  #[test]
  fn test_tenor_lookup() {
    assert!(is_eq_vol_tenor("3M"));
    assert!(!is_eq_vol_tenor("18M"));
  }

  #[test]
  fn test_format_strike() {
    assert_eq!(format_strike(100.0), "100");
    assert_eq!(format_strike(82.5), "82.5");
  }
}
