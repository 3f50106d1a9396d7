//! Document JSON parsing

use crate::schema::{DocumentInput, LineItem};
use crate::{DocumentError, Result};

/// Parse a document request from JSON string
pub fn parse_document(json: &str) -> Result<DocumentInput> {
    serde_json::from_str(json).map_err(|e| DocumentError::ParseError(e.to_string()))
}

/// Parse a flat line-item array from JSON string
pub fn parse_items(json: &str) -> Result<Vec<LineItem>> {
    serde_json::from_str(json).map_err(|e| DocumentError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::DocumentKind;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    #[test]
    fn test_parse_document() {
        let json = r#"{
            "kind": "receipt",
            "number": "RC-2025-0007",
            "issuedOn": "2025-01-22",
            "items": [
                { "id": "a", "description": "งานออกแบบ", "amount": 1000, "order": 0 },
                { "id": "b", "description": "ร่างแบบ", "amount": 400, "order": 0, "parentId": "a" }
            ],
            "tax": { "hasVat": true },
            "fields": { "customerName": "บริษัท ตัวอย่าง จำกัด" }
        }"#;

        let input = parse_document(json).unwrap();
        assert_eq!(input.kind, DocumentKind::Receipt);
        assert_eq!(input.number.as_deref(), Some("RC-2025-0007"));
        assert_eq!(input.items.len(), 2);
        assert_eq!(input.items[0].amount, Decimal::new(1000, 0));
        assert!(input.tax.has_vat);
        assert_eq!(input.fields["customerName"], "บริษัท ตัวอย่าง จำกัด");
    }

    #[test]
    fn test_parse_items() {
        let items = parse_items(r#"[{ "id": "a", "amount": "12.50" }]"#).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].amount, Decimal::new(1250, 2));
    }

    #[test]
    fn test_parse_error() {
        let err = parse_document(r#"{ "kind": "letter" }"#).unwrap_err();
        assert!(matches!(err, DocumentError::ParseError(_)));

        let err = parse_items("not json").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse document"));
    }
}
