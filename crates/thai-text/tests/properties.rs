//! Property tests for numerals and line-break guarding

use proptest::prelude::*;
use rust_decimal::Decimal;
use thai_text::{
    format_thai_baht, format_thai_number, guard_line_breaks, parse_thai_number, WORD_JOINER,
};

fn strip_joiners(text: &str) -> String {
    text.chars().filter(|&c| c != WORD_JOINER).collect()
}

/// Thai letters, ASCII digits, spaces and a few Latin letters
fn mixed_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just('ก'),
            Just('ถ'),
            Just('น'),
            Just('ฯ'),
            Just(' '),
            Just('/'),
            Just('a'),
            Just('1'),
            Just('0'),
            Just('5'),
            Just(WORD_JOINER),
        ],
        0..40,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn numeral_round_trips(n in any::<u64>()) {
        let text = format_thai_number(n.into());
        prop_assert_eq!(parse_thai_number(&text), Some(u128::from(n)));
    }

    #[test]
    fn numeral_never_spells_zero(n in 1u64..) {
        prop_assert!(!format_thai_number(n.into()).contains("ศูนย์"));
    }

    #[test]
    fn baht_words_for_whole_amounts(n in 1u64..1_000_000_000_000) {
        let text = format_thai_baht(Decimal::from(n)).unwrap();
        prop_assert_eq!(text, format!("{}บาทถ้วน", format_thai_number(n.into())));
    }

    #[test]
    fn baht_words_for_any_two_decimal_amount(cents in 0i64..100_000_000) {
        let amount = Decimal::new(cents, 2);
        let text = format_thai_baht(amount).unwrap();
        prop_assert!(text.ends_with("ถ้วน") || text.ends_with("สตางค์"));
    }

    #[test]
    fn guard_only_inserts_joiners(text in mixed_text()) {
        let guarded = guard_line_breaks(&text);
        prop_assert_eq!(strip_joiners(&guarded), strip_joiners(&text));
        prop_assert!(guarded.chars().count() >= text.chars().count());
    }

    #[test]
    fn guard_is_idempotent(text in mixed_text()) {
        let once = guard_line_breaks(&text);
        prop_assert_eq!(guard_line_breaks(&once), once);
    }

    #[test]
    fn guard_leaves_plain_text_alone(text in "[a-zA-Z ,.]{0,40}") {
        prop_assert_eq!(guard_line_breaks(&text), text);
    }

    #[test]
    fn guard_wraps_trailing_postal_code(prefix in "[a-zก-ฮ ]{0,20}", code in "[0-9]{5}") {
        let text = format!("{prefix}{code}");
        let guarded = guard_line_breaks(&text);
        let wrapped = format!("{WORD_JOINER}{code}{WORD_JOINER}");
        prop_assert!(guarded.ends_with(&wrapped));
    }
}
