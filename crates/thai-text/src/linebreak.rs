//! Line-break guarding for mixed Thai and digit text
//!
//! PDF layout engines happily break between a Thai word and the number that
//! follows it, or in the middle of a postal code. [`guard_line_breaks`]
//! inserts U+2060 WORD JOINER at those boundaries. [`protect_phrase`] is the
//! opt-in variant for keeping a whole phrase on one line.

/// Invisible character that forbids a line break on either side
pub const WORD_JOINER: char = '\u{2060}';

/// Non-breaking replacement for inter-word whitespace
pub const NO_BREAK_SPACE: char = '\u{00A0}';

/// Digits in a Thai postal code
const POSTAL_CODE_LEN: usize = 5;

/// Check if a character is a Thai character
pub fn is_thai_char(c: char) -> bool {
    // Thai Unicode range: U+0E00 to U+0E7F
    ('\u{0E00}'..='\u{0E7F}').contains(&c)
}

/// Insert word joiners so a layout engine cannot split
///
/// - a trailing five-digit run (postal code) from its surroundings, and
/// - a Thai character followed by whitespace from the digits after it.
///
/// Only [`WORD_JOINER`] characters are ever inserted. A boundary that
/// already carries a joiner is left alone, so guarding twice is the same as
/// guarding once.
///
/// # Examples
/// ```
/// use thai_text::{guard_line_breaks, WORD_JOINER};
///
/// let guarded = guard_line_breaks("กรุงเทพฯ 10110");
/// assert_eq!(guarded, format!("กรุงเทพฯ {WORD_JOINER}10110{WORD_JOINER}"));
/// ```
pub fn guard_line_breaks(text: &str) -> String {
    let visible: Vec<char> = text.chars().filter(|&c| c != WORD_JOINER).collect();
    let gaps = joiner_gaps(&visible);

    if !gaps.contains(&true) {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + 2 * WORD_JOINER.len_utf8());
    // Gap `g` sits just before visible character `g`.
    let mut gap = 0;
    let mut joined = false;

    for c in text.chars() {
        if c == WORD_JOINER {
            joined = true;
        } else {
            if gaps[gap] && !joined {
                out.push(WORD_JOINER);
            }
            gap += 1;
            joined = false;
        }
        out.push(c);
    }

    if gaps[gap] && !joined {
        out.push(WORD_JOINER);
    }

    out
}

/// Mark the gaps (between visible characters) that need a joiner
fn joiner_gaps(chars: &[char]) -> Vec<bool> {
    let mut gaps = vec![false; chars.len() + 1];

    let trailing_digits = chars
        .iter()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .count();
    if trailing_digits == POSTAL_CODE_LEN {
        gaps[chars.len() - POSTAL_CODE_LEN] = true;
        gaps[chars.len()] = true;
    }

    for (i, c) in chars.iter().enumerate() {
        if !c.is_ascii_digit() {
            continue;
        }

        let spaces = chars[..i]
            .iter()
            .rev()
            .take_while(|c| c.is_whitespace())
            .count();
        if spaces > 0 && i > spaces && is_thai_char(chars[i - spaces - 1]) {
            gaps[i] = true;
        }
    }

    gaps
}

/// Replace inter-word whitespace with [`NO_BREAK_SPACE`]
///
/// Leading and trailing whitespace, and line breaks, are kept as they are.
pub fn protect_phrase(phrase: &str) -> String {
    let start = phrase.len() - phrase.trim_start().len();
    let end = phrase.trim_end().len();

    if start >= end {
        return phrase.to_string();
    }

    let mut out = String::with_capacity(phrase.len());
    out.push_str(&phrase[..start]);
    out.extend(phrase[start..end].chars().map(|c| {
        if is_breakable_space(c) {
            NO_BREAK_SPACE
        } else {
            c
        }
    }));
    out.push_str(&phrase[end..]);
    out
}

fn is_breakable_space(c: char) -> bool {
    c.is_whitespace() && !matches!(c, '\n' | '\r' | NO_BREAK_SPACE)
}

/// Delimiters of a phrase for [`protect_marked_phrases`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseMarkers {
    pub open: String,
    pub close: String,
}

impl Default for PhraseMarkers {
    fn default() -> Self {
        Self {
            open: "{{".to_string(),
            close: "}}".to_string(),
        }
    }
}

/// Protect every marked phrase and strip its markers
///
/// An opening marker without a matching close is left verbatim, along with
/// the rest of the text after it.
///
/// # Examples
/// ```
/// use thai_text::{protect_marked_phrases, PhraseMarkers, NO_BREAK_SPACE};
///
/// let text = protect_marked_phrases("ชำระโดย {{โอน เงิน}}", &PhraseMarkers::default());
/// assert_eq!(text, format!("ชำระโดย โอน{NO_BREAK_SPACE}เงิน"));
/// ```
pub fn protect_marked_phrases(text: &str, markers: &PhraseMarkers) -> String {
    if markers.open.is_empty() || markers.close.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find(&markers.open) {
        let inner = &rest[open + markers.open.len()..];
        let Some(close) = inner.find(&markers.close) else {
            break;
        };

        out.push_str(&rest[..open]);
        out.push_str(&protect_phrase(&inner[..close]));
        rest = &inner[close + markers.close.len()..];
    }

    out.push_str(rest);
    out
}
