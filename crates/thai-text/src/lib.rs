//! Thai Text - Thai language text processing for financial documents
//!
//! This crate provides:
//! - Thai number words (หนึ่ง, สิบเอ็ด, ยี่สิบ...)
//! - Thai currency words, bahttext (บาท, สตางค์, ถ้วน)
//! - Line-break guarding for Thai text mixed with digits
//! - Money and Thai date display formatting (Buddhist calendar)
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use thai_text::{guard_line_breaks, ThaiFormatter};
//!
//! // Number formatting
//! assert_eq!(ThaiFormatter::format_number(42), "สี่สิบสอง");
//!
//! // Currency formatting
//! let baht = ThaiFormatter::format_baht(Decimal::new(10050, 2)).unwrap();
//! assert_eq!(baht, "หนึ่งร้อยบาทห้าสิบสตางค์");
//!
//! // Keep the postal code on one line
//! let address = guard_line_breaks("กรุงเทพฯ 10110");
//! assert!(address.contains("10110"));
//! ```

mod formatter;
mod linebreak;
mod number;

pub use formatter::{BahtTextCache, ThaiFormatter};
pub use linebreak::{is_thai_char, PhraseMarkers, NO_BREAK_SPACE, WORD_JOINER};

// Re-export commonly used formatting functions
pub use formatter::{
    format_money, format_money_with, format_thai_baht, format_thai_date_long,
    format_thai_date_short, format_thai_year,
};
pub use linebreak::{guard_line_breaks, protect_marked_phrases, protect_phrase};
pub use number::{format_thai_number, parse_thai_number};

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during Thai text processing
#[derive(Debug, Error)]
pub enum ThaiTextError {
    #[error("Amount must not be negative: {0}")]
    NegativeAmount(Decimal),
}

/// Result type for Thai text operations
pub type Result<T> = std::result::Result<T, ThaiTextError>;
