//! Thai currency, money and date formatting

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::*;

use crate::number::format_thai_number;
use crate::{Result, ThaiTextError};

const BAHT: &str = "บาท";
const SATANG: &str = "สตางค์";
const EXACT: &str = "ถ้วน";
const ZERO_BAHT: &str = "ศูนย์บาทถ้วน";

/// Thai month names (short)
const THAI_MONTHS_SHORT: [&str; 12] = [
    "ม.ค.",
    "ก.พ.",
    "มี.ค.",
    "เม.ย.",
    "พ.ค.",
    "มิ.ย.",
    "ก.ค.",
    "ส.ค.",
    "ก.ย.",
    "ต.ค.",
    "พ.ย.",
    "ธ.ค.",
];

/// Thai month names (long)
const THAI_MONTHS_LONG: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

const BUDDHIST_ERA_OFFSET: i32 = 543;

/// Thai text formatting utilities
pub struct ThaiFormatter;

impl ThaiFormatter {
    /// Format a number as Thai text
    pub fn format_number(n: u128) -> String {
        format_thai_number(n)
    }

    /// Format an amount as Thai Baht text
    pub fn format_baht(amount: Decimal) -> Result<String> {
        format_thai_baht(amount)
    }

    /// Format an amount with thousands separators and two decimals
    pub fn format_money(amount: Decimal) -> String {
        format_money(amount)
    }

    /// Format a date in short Thai format
    pub fn format_date_short(date: NaiveDate) -> String {
        format_thai_date_short(date)
    }

    /// Format a date in long Thai format
    pub fn format_date_long(date: NaiveDate) -> String {
        format_thai_date_long(date)
    }

    /// Format a year in Thai Buddhist calendar
    pub fn format_year(year: i32) -> String {
        format_thai_year(year)
    }
}

/// Format an amount as Thai Baht text (bahttext)
///
/// Satang are rounded half-up at the hundredths place. A value that rounds
/// up to 100 satang carries into the baht part.
///
/// # Errors
/// Returns [`ThaiTextError::NegativeAmount`] for amounts below zero.
///
/// # Examples
/// ```
/// use rust_decimal::Decimal;
/// use thai_text::format_thai_baht;
/// assert_eq!(format_thai_baht(Decimal::ZERO).unwrap(), "ศูนย์บาทถ้วน");
/// assert_eq!(format_thai_baht(Decimal::new(100, 0)).unwrap(), "หนึ่งร้อยบาทถ้วน");
/// assert_eq!(format_thai_baht(Decimal::new(10050, 2)).unwrap(), "หนึ่งร้อยบาทห้าสิบสตางค์");
/// ```
pub fn format_thai_baht(amount: Decimal) -> Result<String> {
    if amount < Decimal::ZERO {
        return Err(ThaiTextError::NegativeAmount(amount));
    }

    let (baht, satang) = split_baht(amount);
    if baht == 0 && satang == 0 {
        return Ok(ZERO_BAHT.to_string());
    }

    let mut text = String::new();
    if baht > 0 {
        text.push_str(&format_thai_number(baht));
        text.push_str(BAHT);
    }
    if satang > 0 {
        text.push_str(&format_thai_number(satang.into()));
        text.push_str(SATANG);
    } else {
        text.push_str(EXACT);
    }

    Ok(text)
}

/// Split a non-negative amount into whole baht and rounded satang
///
/// Both parts have scale 0, so their mantissas are the integer values. The
/// mantissa is at most 96 bits and satang at most 100, so neither the casts
/// nor the carry can overflow.
fn split_baht(amount: Decimal) -> (u128, u32) {
    let whole = amount.trunc();

    let mut baht = whole.mantissa().unsigned_abs();
    let mut satang = ((amount - whole) * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .mantissa()
        .unsigned_abs() as u32;

    if satang == 100 {
        baht += 1;
        satang = 0;
    }

    (baht, satang)
}

/// Memoised bahttext keyed on the amount
///
/// Keys are normalised, so `1.5` and `1.50` share an entry.
#[derive(Debug, Default)]
pub struct BahtTextCache {
    entries: HashMap<Decimal, String>,
    hits: u64,
    misses: u64,
}

impl BahtTextCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached words for `amount`, formatting on first use
    pub fn get_or_format(&mut self, amount: Decimal) -> Result<String> {
        let key = amount.normalize();
        if let Some(text) = self.entries.get(&key) {
            self.hits += 1;
            return Ok(text.clone());
        }

        self.misses += 1;
        let text = format_thai_baht(key)?;
        self.entries.insert(key, text.clone());
        Ok(text)
    }

    /// Lookups answered from the cache
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that had to format
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Number of cached amounts
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry and reset the counters
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

/// Format a date in short Thai format (e.g., "22 ม.ค. 68")
pub fn format_thai_date_short(date: NaiveDate) -> String {
    let thai_year = date.year() + BUDDHIST_ERA_OFFSET;
    let month_name = THAI_MONTHS_SHORT[date.month0() as usize];
    format!("{} {} {:02}", date.day(), month_name, thai_year.rem_euclid(100))
}

/// Format a date in long Thai format (e.g., "22 มกราคม 2568")
pub fn format_thai_date_long(date: NaiveDate) -> String {
    let thai_year = date.year() + BUDDHIST_ERA_OFFSET;
    let month_name = THAI_MONTHS_LONG[date.month0() as usize];
    format!("{} {month_name} {thai_year}", date.day())
}

/// Format a year in Thai Buddhist calendar (e.g., "ปี 2568")
///
/// # Arguments
/// * `year` - Gregorian year
pub fn format_thai_year(year: i32) -> String {
    format!("ปี {}", year + BUDDHIST_ERA_OFFSET)
}

/// Format money for display as `#,###.##`
///
/// # Examples
/// ```
/// use rust_decimal::Decimal;
/// use thai_text::format_money;
/// assert_eq!(format_money(Decimal::new(123456, 2)), "1,234.56");
/// ```
pub fn format_money(amount: Decimal) -> String {
    format_money_with("#,###.##", amount)
}

/// Format money with a pattern
///
/// Supports patterns like "#,###.##" for thousand separators and decimal
/// places. Rounds half away from zero.
pub fn format_money_with(format: &str, amount: Decimal) -> String {
    let (precision, thousand_sep, decimal_sep) = parse_format(format);

    let rounded = amount
        .abs()
        .round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.*}", precision as usize, rounded);
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    let int_str = format_with_thousands(int_part, thousand_sep);
    let sign = if amount.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    if precision > 0 {
        format!("{sign}{int_str}{decimal_sep}{frac_part}")
    } else {
        format!("{sign}{int_str}")
    }
}

/// Parse format pattern to extract precision and separators
fn parse_format(format: &str) -> (u32, &str, &str) {
    if format.is_empty() {
        return (2, ",", ".");
    }

    let decimal_pos = format.rfind('.');

    let precision = match decimal_pos {
        Some(pos) => format[pos + 1..]
            .chars()
            .filter(|c| *c == '#' || *c == '0')
            .count() as u32,
        None => 0,
    };

    let thousand_sep = if format.contains(',') { "," } else { "" };
    let decimal_sep = if precision > 0 { "." } else { "" };

    (precision, thousand_sep, decimal_sep)
}

/// Insert thousand separators into a run of ASCII digits
fn format_with_thousands(digits: &str, sep: &str) -> String {
    if sep.is_empty() {
        return digits.to_string();
    }

    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push_str(sep);
        }
        result.push(c);
    }

    result
}
