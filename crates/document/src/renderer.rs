//! Document assembly
//!
//! Turns a [`DocumentInput`] into the strings and figures the PDF layer lays
//! out: item tree, totals, bahttext and line-break-guarded free text.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use thai_text::{
    format_money, format_thai_baht, format_thai_date_long, guard_line_breaks,
    protect_marked_phrases, BahtTextCache, PhraseMarkers,
};
use tracing::debug;

use crate::schema::{DocumentInput, DocumentKind, ItemNode, LineItem};
use crate::totals::{compute_totals, DocumentTotals};
use crate::tree::{build_item_tree, sort_by_order};
use crate::Result;

/// One printed row of the item table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedRow {
    /// Row label ("1", "1.2"...)
    pub number: String,
    pub description: String,
    pub quantity: String,
    pub unit: String,
    pub price_per_unit: String,
    pub amount: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sub_items: Vec<RenderedRow>,
}

/// Totals formatted for display
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayTotals {
    pub subtotal: String,
    pub vat_amount: String,
    pub withholding_tax_amount: String,
    pub total: String,
    pub net_total: String,
}

impl From<&DocumentTotals> for DisplayTotals {
    fn from(totals: &DocumentTotals) -> Self {
        Self {
            subtotal: format_money(totals.subtotal),
            vat_amount: format_money(totals.vat_amount),
            withholding_tax_amount: format_money(totals.withholding_tax_amount),
            total: format_money(totals.total),
            net_total: format_money(totals.net_total),
        }
    }
}

/// Everything the rendering collaborator needs for one document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedDocument {
    pub kind: DocumentKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Issue date in long Thai form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_on: Option<String>,
    pub items: Vec<ItemNode>,
    pub rows: Vec<RenderedRow>,
    pub totals: DocumentTotals,
    pub display_totals: DisplayTotals,
    /// Net total as bahttext
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_in_words: Option<String>,
    pub fields: BTreeMap<String, String>,
    /// Ids of items dropped while rebuilding the hierarchy
    pub dropped_items: Vec<String>,
}

impl RenderedDocument {
    /// Serialize for the rendering layer
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Document renderer
pub struct DocumentRenderer<'a> {
    /// The document data to render
    input: &'a DocumentInput,
    /// Markers for opt-in phrase protection in free text
    markers: Option<&'a PhraseMarkers>,
}

impl<'a> DocumentRenderer<'a> {
    /// Create a new renderer for a document
    pub fn new(input: &'a DocumentInput) -> Self {
        Self {
            input,
            markers: None,
        }
    }

    /// Protect marked phrases in free text before guarding it
    pub fn with_phrase_markers(mut self, markers: &'a PhraseMarkers) -> Self {
        self.markers = Some(markers);
        self
    }

    /// Render the document
    pub fn render(&self) -> Result<RenderedDocument> {
        self.render_inner(|amount| Ok(format_thai_baht(amount)?))
    }

    /// Render the document, reusing bahttext from `cache`
    pub fn render_with_cache(&self, cache: &mut BahtTextCache) -> Result<RenderedDocument> {
        self.render_inner(|amount| Ok(cache.get_or_format(amount)?))
    }

    fn render_inner<F>(&self, mut baht_text: F) -> Result<RenderedDocument>
    where
        F: FnMut(Decimal) -> Result<String>,
    {
        let input = self.input;

        let mut items = input.items.clone();
        if input.sort_items {
            sort_by_order(&mut items);
        }

        let tree = build_item_tree(&items);
        let totals = compute_totals(&tree.roots, &input.tax)?;

        let amount_in_words = if input.amount_in_words {
            Some(baht_text(totals.net_total)?)
        } else {
            None
        };

        let roots: Vec<ItemNode> = tree
            .roots
            .into_iter()
            .map(|node| ItemNode {
                item: self.guard_item(node.item),
                sub_items: node
                    .sub_items
                    .into_iter()
                    .map(|sub| self.guard_item(sub))
                    .collect(),
            })
            .collect();

        let rows = roots
            .iter()
            .enumerate()
            .map(|(i, node)| {
                let number = (i + 1).to_string();
                let mut row = render_row(&node.item, number.clone());
                row.sub_items = node
                    .sub_items
                    .iter()
                    .enumerate()
                    .map(|(j, sub)| render_row(sub, format!("{number}.{}", j + 1)))
                    .collect();
                row
            })
            .collect();

        let fields = input
            .fields
            .iter()
            .map(|(key, value)| (key.clone(), self.guard_text(value)))
            .collect();

        debug!(
            kind = ?input.kind,
            items = roots.len(),
            dropped = tree.dropped.len(),
            net_total = %totals.net_total,
            "assembled document"
        );

        Ok(RenderedDocument {
            kind: input.kind,
            title: input.kind.thai_title().to_string(),
            number: input.number.clone(),
            issued_on: input.issued_on.map(format_thai_date_long),
            items: roots,
            rows,
            display_totals: DisplayTotals::from(&totals),
            totals,
            amount_in_words,
            fields,
            dropped_items: tree.dropped,
        })
    }

    /// Apply phrase protection (if configured) then line-break guarding
    fn guard_text(&self, text: &str) -> String {
        match self.markers {
            Some(markers) => guard_line_breaks(&protect_marked_phrases(text, markers)),
            None => guard_line_breaks(text),
        }
    }

    fn guard_item(&self, mut item: LineItem) -> LineItem {
        item.description = self.guard_text(&item.description);
        item.unit = self.guard_text(&item.unit);
        item
    }
}

fn render_row(item: &LineItem, number: String) -> RenderedRow {
    RenderedRow {
        number,
        description: item.description.clone(),
        quantity: item.quantity.normalize().to_string(),
        unit: item.unit.clone(),
        price_per_unit: format_money(item.price_per_unit),
        amount: format_money(item.amount),
        sub_items: Vec::new(),
    }
}

/// Render a document with default settings
pub fn assemble(input: &DocumentInput) -> Result<RenderedDocument> {
    DocumentRenderer::new(input).render()
}
