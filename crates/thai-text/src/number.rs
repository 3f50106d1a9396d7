//! Thai numeral words (หนึ่ง, สิบเอ็ด, ยี่สิบ...)

/// Thai number names (0-9)
pub(crate) const NUMBER_NAMES: [&str; 10] = [
    "ศูนย์",
    "หนึ่ง",
    "สอง",
    "สาม",
    "สี่",
    "ห้า",
    "หก",
    "เจ็ด",
    "แปด",
    "เก้า",
];

/// Thai unit names for each position inside a six-digit group
const UNIT_NAMES: [&str; 6] = ["", "สิบ", "ร้อย", "พัน", "หมื่น", "แสน"];

const MILLION_WORD: &str = "ล้าน";
const MILLION: u128 = 1_000_000;

/// Irregular forms
const TEN: &str = "สิบ";
const TWENTY: &str = "ยี่สิบ";
const TRAILING_ONE: &str = "เอ็ด";

/// Format a non-negative integer as Thai words.
///
/// Zero renders as an empty string; the currency layer decides how to
/// spell a zero amount.
///
/// # Examples
/// ```
/// use thai_text::format_thai_number;
/// assert_eq!(format_thai_number(0), "");
/// assert_eq!(format_thai_number(21), "ยี่สิบเอ็ด");
/// assert_eq!(format_thai_number(1_000_000), "หนึ่งล้าน");
/// ```
pub fn format_thai_number(n: u128) -> String {
    // Six-digit groups, least significant first.
    let mut groups = Vec::new();
    let mut rest = n;
    while rest > 0 {
        groups.push((rest % MILLION) as u32);
        rest /= MILLION;
    }

    let mut result = String::new();
    for (i, group) in groups.iter().rev().enumerate() {
        if i > 0 {
            result.push_str(MILLION_WORD);
        }
        push_group(&mut result, *group);
    }

    result
}

/// Append the words for a single group (0..1_000_000)
fn push_group(out: &mut String, group: u32) {
    let mut place = 100_000;

    for position in (0..UNIT_NAMES.len()).rev() {
        let digit = (group / place % 10) as usize;
        place /= 10;

        if digit == 0 {
            continue;
        }

        match (position, digit) {
            (1, 1) => out.push_str(TEN),
            (1, 2) => out.push_str(TWENTY),
            (0, 1) if group >= 10 => out.push_str(TRAILING_ONE),
            _ => {
                out.push_str(NUMBER_NAMES[digit]);
                out.push_str(UNIT_NAMES[position]);
            }
        }
    }
}

const DIGIT_TOKENS: [(&str, u128); 11] = [
    ("หนึ่ง", 1),
    ("เอ็ด", 1),
    ("สอง", 2),
    ("ยี่", 2),
    ("สาม", 3),
    ("สี่", 4),
    ("ห้า", 5),
    ("หก", 6),
    ("เจ็ด", 7),
    ("แปด", 8),
    ("เก้า", 9),
];

const UNIT_TOKENS: [(&str, u128); 5] = [
    ("สิบ", 10),
    ("ร้อย", 100),
    ("พัน", 1_000),
    ("หมื่น", 10_000),
    ("แสน", 100_000),
];

/// Parse Thai number words back into an integer.
///
/// Accepts the output of [`format_thai_number`] (and `"ศูนย์"` for zero).
/// Returns `None` on unknown words, two digits in a row, or overflow.
pub fn parse_thai_number(text: &str) -> Option<u128> {
    if text == NUMBER_NAMES[0] {
        return Some(0);
    }

    let mut rest = text;
    let mut millions: u128 = 0;
    let mut group: u128 = 0;
    let mut pending: Option<u128> = None;

    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix(MILLION_WORD) {
            let value = group.checked_add(pending.take().unwrap_or(0))?;
            millions = millions.checked_add(value)?.checked_mul(MILLION)?;
            group = 0;
            rest = tail;
        } else if let Some((token, digit)) = find_token(rest, &DIGIT_TOKENS) {
            if pending.is_some() {
                return None;
            }
            pending = Some(digit);
            rest = &rest[token.len()..];
        } else if let Some((token, place)) = find_token(rest, &UNIT_TOKENS) {
            group = group.checked_add(pending.take().unwrap_or(1) * place)?;
            rest = &rest[token.len()..];
        } else {
            return None;
        }
    }

    millions.checked_add(group.checked_add(pending.unwrap_or(0))?)
}

fn find_token<'a>(text: &str, tokens: &[(&'a str, u128)]) -> Option<(&'a str, u128)> {
    tokens
        .iter()
        .find(|(token, _)| text.starts_with(token))
        .copied()
}
