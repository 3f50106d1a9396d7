//! Document - line items, totals and text assembly for Thai financial documents
//!
//! This crate provides:
//! - Line-item JSON schema types
//! - Two-level item hierarchy from a flat, parent-referencing list
//! - Subtotal, VAT (7%), withholding tax and net total in `Decimal`
//! - Document assembly: bahttext of the net total and line-break guarding
//!   of every free-text field
//!
//! # Example
//!
//! ```
//! use document::{build, compute_totals, LineItem, TaxConfiguration};
//! use rust_decimal::Decimal;
//!
//! let items = vec![
//!     LineItem::new("a", Decimal::new(1000, 0)),
//!     LineItem::new("b", Decimal::new(2000, 0)),
//! ];
//! let config = TaxConfiguration::default()
//!     .with_vat()
//!     .with_withholding_tax(Decimal::new(3, 0));
//!
//! let roots = build(&items);
//! let totals = compute_totals(&roots, &config).unwrap();
//! assert_eq!(totals.net_total, Decimal::new(3120, 0));
//! ```

pub mod parser;
mod renderer;
mod schema;
mod totals;
mod tree;

pub use parser::{parse_document, parse_items};
pub use renderer::{assemble, DisplayTotals, DocumentRenderer, RenderedDocument, RenderedRow};
pub use schema::*;
pub use totals::{compute_totals, round_money, DocumentTotals, TaxConfiguration, VAT_RATE};
pub use tree::{build, build_item_tree, sort_by_order, ItemTree};

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during document processing
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Line item {item_id} has a negative amount: {amount}")]
    NegativeAmount { item_id: String, amount: Decimal },

    #[error("Withholding tax rate must be between 0 and 100, got {0}")]
    InvalidWithholdingRate(Decimal),

    #[error("Amount overflow while computing {0}")]
    AmountOverflow(&'static str),

    #[error("Failed to parse document: {0}")]
    ParseError(String),

    #[error("Text error: {0}")]
    TextError(#[from] thai_text::ThaiTextError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for document operations
pub type Result<T> = std::result::Result<T, DocumentError>;
