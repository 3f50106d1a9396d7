//! Integration tests for document assembly

use document::{
    assemble, build, build_item_tree, compute_totals, parse_document, LineItem, TaxConfiguration,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rust_decimal::Decimal;
use thai_text::WORD_JOINER;

#[test]
fn test_orphan_reference_is_dropped() {
    let items = vec![
        LineItem::new("a", Decimal::ZERO),
        LineItem::new("b", Decimal::ZERO).with_parent("a"),
        LineItem::new("c", Decimal::ZERO).with_parent("missing"),
    ];

    let roots = build(&items);

    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].item.id, "a");
    assert_eq!(roots[0].sub_items.len(), 1);
    assert_eq!(roots[0].sub_items[0].id, "b");
}

#[test]
fn test_totals_with_vat_and_withholding() {
    let items = vec![
        LineItem::new("a", Decimal::new(1000, 0)),
        LineItem::new("b", Decimal::new(2000, 0)),
    ];
    let config = TaxConfiguration {
        has_vat: true,
        has_withholding_tax: true,
        withholding_tax_rate: Decimal::new(3, 0),
    };

    let totals = compute_totals(&build(&items), &config).unwrap();

    assert_eq!(totals.subtotal, Decimal::new(3000, 0));
    assert_eq!(totals.vat_amount, Decimal::new(210, 0));
    assert_eq!(totals.total, Decimal::new(3210, 0));
    assert_eq!(totals.withholding_tax_amount, Decimal::new(90, 0));
    assert_eq!(totals.net_total, Decimal::new(3120, 0));
}

#[test]
fn test_assemble_from_json() {
    let json = r#"{
        "kind": "quotation",
        "number": "QT-2025-0001",
        "issuedOn": "2025-03-01",
        "items": [
            { "id": "1", "description": "ระบบกล้องวงจรปิด", "quantity": 1, "unit": "ชุด",
              "pricePerUnit": "15000", "amount": "15000", "order": 0 },
            { "id": "1-1", "description": "กล้อง 4 ตัว", "quantity": 4, "unit": "ตัว",
              "pricePerUnit": "2500", "amount": "10000", "order": 0, "parentId": "1" },
            { "id": "2", "description": "ค่าแรงติดตั้ง", "quantity": 1, "unit": "งาน",
              "pricePerUnit": "500.50", "amount": "500.50", "order": 1, "parentId": "" },
            { "id": "x", "description": "ลบแล้ว", "amount": "99", "parentId": "gone" }
        ],
        "tax": { "hasVat": true, "hasWithholdingTax": true, "withholdingTaxRate": "3" },
        "fields": {
            "customerName": "บริษัท ตัวอย่าง จำกัด",
            "address": "99/1 ถนนสุขุมวิท แขวงคลองเตย กรุงเทพฯ 10110"
        }
    }"#;

    let input = parse_document(json).unwrap();
    let doc = assemble(&input).unwrap();

    assert_eq!(doc.title, "ใบเสนอราคา");
    assert_eq!(doc.issued_on.as_deref(), Some("1 มีนาคม 2568"));
    assert_eq!(doc.items.len(), 2);
    assert_eq!(doc.dropped_items, vec!["x".to_string()]);

    // 15000 + 500.50; the 10000 sub-item is informational
    assert_eq!(doc.totals.subtotal, Decimal::new(1550050, 2));
    assert_eq!(doc.display_totals.subtotal, "15,500.50");
    // 15500.50 * 0.07 = 1085.035
    assert_eq!(doc.display_totals.vat_amount, "1,085.04");
    assert_eq!(doc.display_totals.total, "16,585.54");
    // 15500.50 * 0.03 = 465.015
    assert_eq!(doc.display_totals.withholding_tax_amount, "465.02");
    assert_eq!(doc.display_totals.net_total, "16,120.52");
    assert_eq!(
        doc.amount_in_words.as_deref(),
        Some("หนึ่งหมื่นหกพันหนึ่งร้อยยี่สิบบาทห้าสิบสองสตางค์")
    );

    assert_eq!(
        doc.fields["address"],
        format!("99/1 ถนนสุขุมวิท แขวงคลองเตย กรุงเทพฯ {WORD_JOINER}10110{WORD_JOINER}")
    );
    assert_eq!(doc.fields["customerName"], "บริษัท ตัวอย่าง จำกัด");
    assert_eq!(
        doc.items[0].sub_items[0].description,
        format!("กล้อง {WORD_JOINER}4 ตัว")
    );
}

#[test]
fn test_assemble_rejects_negative_amount() {
    let json = r#"{ "items": [ { "id": "a", "amount": "-10" } ] }"#;
    let input = parse_document(json).unwrap();
    let err = assemble(&input).unwrap_err();
    assert_eq!(err.to_string(), "Line item a has a negative amount: -10");
}

#[test]
fn test_assemble_ignores_stale_withholding_rate() {
    let json = r#"{
        "items": [ { "id": "a", "amount": "1000" } ],
        "tax": { "hasVat": true, "hasWithholdingTax": false, "withholdingTaxRate": "150" }
    }"#;
    let input = parse_document(json).unwrap();
    let doc = assemble(&input).unwrap();

    assert_eq!(doc.totals.withholding_tax_amount, Decimal::ZERO);
    assert_eq!(doc.totals.net_total, Decimal::new(1070, 0));
    assert_eq!(doc.amount_in_words.as_deref(), Some("หนึ่งพันเจ็ดสิบบาทถ้วน"));
}

#[test]
fn test_assemble_empty_document() {
    let input = parse_document("{}").unwrap();
    let doc = assemble(&input).unwrap();

    assert!(doc.items.is_empty());
    assert_eq!(doc.totals.net_total, Decimal::ZERO);
    assert_eq!(doc.amount_in_words.as_deref(), Some("ศูนย์บาทถ้วน"));
}

/// Small id alphabet so parent references often resolve
fn line_items() -> impl Strategy<Value = Vec<LineItem>> {
    let ids = prop::sample::select(vec!["a", "b", "c", "d", "e"]);
    let parents = prop::option::of(prop::sample::select(vec!["", "a", "b", "c", "z"]));
    prop::collection::vec((ids, parents, 0i32..5), 0..12).prop_map(|specs| {
        specs
            .into_iter()
            .map(|(id, parent, order)| {
                let item = LineItem::new(id, Decimal::ONE).with_order(order);
                match parent {
                    Some(parent) => item.with_parent(parent),
                    None => item,
                }
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn tree_accounts_for_every_item(items in line_items()) {
        let tree = build_item_tree(&items);
        prop_assert_eq!(
            tree.roots.len() + tree.descendant_count() + tree.dropped.len(),
            items.len()
        );
    }

    #[test]
    fn subtotal_counts_roots_only(items in line_items()) {
        let tree = build_item_tree(&items);
        let totals = compute_totals(&tree.roots, &TaxConfiguration::default()).unwrap();
        prop_assert_eq!(totals.subtotal, Decimal::from(tree.roots.len()));
    }
}
