//! WASM bindings for Thai document formatting
//!
//! This crate provides JavaScript-friendly API for:
//! - Thai number words and bahttext
//! - Line-break guarding of free text before it reaches the PDF layer
//! - Item hierarchy, totals and full document assembly
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { ThaiFormatter, DocumentAssembler } from 'thai-doc-wasm';
//!
//! await init();
//!
//! ThaiFormatter.formatBaht("3120.00"); // "สามพันหนึ่งร้อยยี่สิบบาทถ้วน"
//! ThaiFormatter.guard("กรุงเทพฯ 10110");
//!
//! const assembler = new DocumentAssembler();
//! assembler.setPhraseMarkers("{{", "}}");
//! const doc = assembler.render({ kind: "invoice", items, tax, fields });
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;
use thai_text::{BahtTextCache, PhraseMarkers};
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js_error<E: std::fmt::Display>(e: E) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Amounts cross the boundary as strings to avoid float rounding
fn parse_amount(amount: &str) -> Result<Decimal, JsValue> {
    Decimal::from_str(amount.trim()).map_err(to_js_error)
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(to_js_error)
}

/// Thai text formatting utilities
#[wasm_bindgen]
pub struct ThaiFormatter;

#[wasm_bindgen]
impl ThaiFormatter {
    /// Format a number as Thai words
    ///
    /// @param n - Non-negative integer
    /// @returns Thai text (e.g., "สี่สิบสอง"); empty for zero
    #[wasm_bindgen(js_name = formatNumber)]
    pub fn format_number(n: u64) -> String {
        thai_text::format_thai_number(n.into())
    }

    /// Format an amount as Thai Baht text
    ///
    /// @param amount - Decimal string (e.g., "100.50")
    /// @returns Thai text (e.g., "หนึ่งร้อยบาทห้าสิบสตางค์")
    #[wasm_bindgen(js_name = formatBaht)]
    pub fn format_baht(amount: &str) -> Result<String, JsValue> {
        let amount = parse_amount(amount)?;
        thai_text::format_thai_baht(amount).map_err(to_js_error)
    }

    /// Format money for display
    ///
    /// @param amount - Decimal string
    /// @returns Formatted string (e.g., "1,234.56")
    #[wasm_bindgen(js_name = formatMoney)]
    pub fn format_money(amount: &str) -> Result<String, JsValue> {
        Ok(thai_text::format_money(parse_amount(amount)?))
    }

    /// Insert word joiners at Thai/digit and postal-code boundaries
    pub fn guard(text: &str) -> String {
        thai_text::guard_line_breaks(text)
    }

    /// Keep a phrase on one line
    #[wasm_bindgen(js_name = protectPhrase)]
    pub fn protect_phrase(phrase: &str) -> String {
        thai_text::protect_phrase(phrase)
    }
}

/// Document assembly with a per-instance bahttext cache
#[wasm_bindgen]
pub struct DocumentAssembler {
    markers: Option<PhraseMarkers>,
    cache: BahtTextCache,
}

#[wasm_bindgen]
impl DocumentAssembler {
    /// Create a new assembler without phrase markers
    #[wasm_bindgen(constructor)]
    pub fn new() -> DocumentAssembler {
        DocumentAssembler {
            markers: None,
            cache: BahtTextCache::new(),
        }
    }

    /// Enable phrase protection for text between `open` and `close`
    #[wasm_bindgen(js_name = setPhraseMarkers)]
    pub fn set_phrase_markers(&mut self, open: &str, close: &str) {
        self.markers = Some(PhraseMarkers {
            open: open.to_string(),
            close: close.to_string(),
        });
    }

    /// Rebuild the item hierarchy
    ///
    /// @param items - Flat array of line items
    /// @returns Array of top-level items with `subItems`
    #[wasm_bindgen(js_name = buildItems)]
    pub fn build_items(&self, items: JsValue) -> Result<JsValue, JsValue> {
        let items: Vec<document::LineItem> = serde_wasm_bindgen::from_value(items)?;
        to_js(&document::build(&items))
    }

    /// Compute totals over top-level items
    ///
    /// @param roots - Output of `buildItems`
    /// @param tax - `{ hasVat, hasWithholdingTax, withholdingTaxRate }`
    #[wasm_bindgen(js_name = computeTotals)]
    pub fn compute_totals(&self, roots: JsValue, tax: JsValue) -> Result<JsValue, JsValue> {
        let roots: Vec<document::ItemNode> = serde_wasm_bindgen::from_value(roots)?;
        let tax: document::TaxConfiguration = serde_wasm_bindgen::from_value(tax)?;
        let totals = document::compute_totals(&roots, &tax).map_err(to_js_error)?;
        to_js(&totals)
    }

    /// Assemble a document for the PDF layer
    ///
    /// @param input - Document data (kind, items, tax, fields...)
    /// @returns Rendered document object
    pub fn render(&mut self, input: JsValue) -> Result<JsValue, JsValue> {
        let input: document::DocumentInput = serde_wasm_bindgen::from_value(input)?;

        let mut renderer = document::DocumentRenderer::new(&input);
        if let Some(ref markers) = self.markers {
            renderer = renderer.with_phrase_markers(markers);
        }

        let rendered = renderer
            .render_with_cache(&mut self.cache)
            .map_err(to_js_error)?;
        to_js(&rendered)
    }

    /// Number of bahttext lookups served from the cache
    #[wasm_bindgen(js_name = cacheHits)]
    pub fn cache_hits(&self) -> u64 {
        self.cache.hits()
    }
}

impl Default for DocumentAssembler {
    fn default() -> Self {
        Self::new()
    }
}
