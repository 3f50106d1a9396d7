//! Document JSON schema types

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::totals::TaxConfiguration;

/// Kind of financial document
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    #[default]
    Quotation,
    Invoice,
    Receipt,
}

impl DocumentKind {
    /// Title printed at the top of the document
    pub fn thai_title(&self) -> &'static str {
        match self {
            DocumentKind::Quotation => "ใบเสนอราคา",
            DocumentKind::Invoice => "ใบแจ้งหนี้",
            DocumentKind::Receipt => "ใบเสร็จรับเงิน",
        }
    }
}

/// A line item as stored, before the hierarchy is rebuilt
///
/// `amount` is taken as given. It is never recomputed from
/// `quantity * price_per_unit`, so manual overrides survive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Item identifier
    pub id: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub quantity: Decimal,

    /// Unit of measure (ชิ้น, ชุด, เดือน...)
    #[serde(default)]
    pub unit: String,

    #[serde(default)]
    pub price_per_unit: Decimal,

    /// Line amount
    #[serde(default)]
    pub amount: Decimal,

    /// Position among siblings
    #[serde(default)]
    pub order: i32,

    /// Parent item; empty or absent for a top-level item
    #[serde(default)]
    pub parent_id: Option<String>,
}

impl LineItem {
    /// Create a top-level item with the given amount
    pub fn new(id: &str, amount: Decimal) -> Self {
        Self {
            id: id.to_string(),
            description: String::new(),
            quantity: Decimal::ONE,
            unit: String::new(),
            price_per_unit: amount,
            amount,
            order: 0,
            parent_id: None,
        }
    }

    pub fn with_parent(mut self, parent_id: &str) -> Self {
        self.parent_id = Some(parent_id.to_string());
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// The parent reference, if it is set and non-empty
    pub fn parent(&self) -> Option<&str> {
        self.parent_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Whether this item belongs at the top level
    pub fn is_root(&self) -> bool {
        self.parent().is_none()
    }
}

/// Top-level item with its sub-items in `order` sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemNode {
    #[serde(flatten)]
    pub item: LineItem,

    #[serde(default)]
    pub sub_items: Vec<LineItem>,
}

impl ItemNode {
    pub fn new(item: LineItem) -> Self {
        Self {
            item,
            sub_items: Vec::new(),
        }
    }
}

fn default_amount_in_words() -> bool {
    true
}

/// Document data as supplied by the data-fetch layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInput {
    #[serde(default)]
    pub kind: DocumentKind,

    /// Document number (QT-2025-0001...)
    #[serde(default)]
    pub number: Option<String>,

    #[serde(default)]
    pub issued_on: Option<NaiveDate>,

    /// Flat item list, sub-items referencing their parent
    #[serde(default)]
    pub items: Vec<LineItem>,

    #[serde(default)]
    pub tax: TaxConfiguration,

    /// Free-text fields (customer name, address, notes...)
    #[serde(default)]
    pub fields: BTreeMap<String, String>,

    /// Render the net total as bahttext
    #[serde(default = "default_amount_in_words")]
    pub amount_in_words: bool,

    /// Stable-sort items on `order` before building the hierarchy
    #[serde(default)]
    pub sort_items: bool,
}

impl Default for DocumentInput {
    fn default() -> Self {
        Self {
            kind: DocumentKind::default(),
            number: None,
            issued_on: None,
            items: Vec::new(),
            tax: TaxConfiguration::default(),
            fields: BTreeMap::new(),
            amount_in_words: default_amount_in_words(),
            sort_items: false,
        }
    }
}
