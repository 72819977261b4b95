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

//! Display helpers for monetary amounts and metrics

/// Placeholder shown for missing values
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a dollar amount with a magnitude suffix.
///
/// Trillions and billions get two decimals, millions one; smaller amounts are
/// written out with thousands separators. Negative amounts carry a leading
/// `-` before the `$`.
///
/// ```
/// use fa_models::format_large_number;
///
/// assert_eq!(format_large_number(Some(2_800_000_000_000.0)), "$2.80T");
/// assert_eq!(format_large_number(Some(-11_000_000_000.0)), "-$11.00B");
/// assert_eq!(format_large_number(None), "N/A");
/// ```
pub fn format_large_number(num: Option<f64>) -> String {
  let Some(num) = num.filter(|n| !n.is_nan()) else {
    return NOT_AVAILABLE.to_string();
  };
  let abs = num.abs();
  let sign = if num < 0.0 { "-" } else { "" };

  if abs >= 1e12 {
    format!("{}${:.2}T", sign, abs / 1e12)
  } else if abs >= 1e9 {
    format!("{}${:.2}B", sign, abs / 1e9)
  } else if abs >= 1e6 {
    format!("{}${:.1}M", sign, abs / 1e6)
  } else {
    format!("{}${}", sign, group_thousands(abs))
  }
}

/// Market capitalization as whole billions with one decimal, e.g. `"$2800.0B"`.
///
/// Zero and missing caps render as `"N/A"`.
pub fn format_market_cap(market_cap: Option<f64>) -> String {
  match market_cap.filter(|cap| *cap != 0.0 && cap.is_finite()) {
    Some(cap) => format!("${:.1}B", cap / 1e9),
    None => NOT_AVAILABLE.to_string(),
  }
}

/// `"12.34%"` or `"N/A"`
pub fn format_percent(value: Option<f64>) -> String {
  value.map(|v| format!("{:.2}%", v)).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// `"$195.50"` or `"N/A"`
pub fn format_price(value: Option<f64>) -> String {
  value.map(|v| format!("${:.2}", v)).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// `"28.30"` or `"N/A"`
pub fn format_ratio(value: Option<f64>) -> String {
  value.map(|v| format!("{:.2}", v)).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

// en-US grouping: comma separators, at most three fraction digits.
fn group_thousands(abs: f64) -> String {
  let fixed = format!("{:.3}", abs);
  let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

  let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
  for (i, digit) in int_part.chars().enumerate() {
    if i > 0 && (int_part.len() - i) % 3 == 0 {
      grouped.push(',');
    }
    grouped.push(digit);
  }

  let frac = frac_part.trim_end_matches('0');
  if frac.is_empty() {
    grouped
  } else {
    format!("{}.{}", grouped, frac)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_not_available() {
    assert_eq!(format_large_number(None), "N/A");
    assert_eq!(format_large_number(Some(f64::NAN)), "N/A");
  }

  #[test]
  fn test_magnitudes() {
    assert_eq!(format_large_number(Some(2_800_000_000_000.0)), "$2.80T");
    assert_eq!(format_large_number(Some(48_200_000_000.0)), "$48.20B");
    assert_eq!(format_large_number(Some(5_600_000.0)), "$5.6M");
    assert_eq!(format_large_number(Some(1_000_000.0)), "$1.0M");
  }

  #[test]
  fn test_negative_amounts() {
    assert_eq!(format_large_number(Some(-11_000_000_000.0)), "-$11.00B");
    assert_eq!(format_large_number(Some(-30_000_000.0)), "-$30.0M");
    assert_eq!(format_large_number(Some(-1_500.0)), "-$1,500");
  }

  #[test]
  fn test_small_amounts_are_grouped() {
    assert_eq!(format_large_number(Some(0.0)), "$0");
    assert_eq!(format_large_number(Some(999.0)), "$999");
    assert_eq!(format_large_number(Some(12_345.0)), "$12,345");
    assert_eq!(format_large_number(Some(999_999.0)), "$999,999");
    assert_eq!(format_large_number(Some(1_234.5)), "$1,234.5");
    assert_eq!(format_large_number(Some(0.12345)), "$0.123");
  }

  #[test]
  fn test_market_cap() {
    assert_eq!(format_market_cap(Some(2.8e12)), "$2800.0B");
    assert_eq!(format_market_cap(Some(1e9)), "$1.0B");
    assert_eq!(format_market_cap(Some(0.0)), "N/A");
    assert_eq!(format_market_cap(None), "N/A");
  }

  #[test]
  fn test_metric_helpers() {
    assert_eq!(format_percent(Some(12.3456)), "12.35%");
    assert_eq!(format_price(Some(195.5)), "$195.50");
    assert_eq!(format_ratio(None), "N/A");
  }
}
