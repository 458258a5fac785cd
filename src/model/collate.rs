//! Explicit word collation.
//!
//! Words are compared level by level, and a later level is only consulted
//! when every earlier level is equal:
//!
//! 1. **primary** - base letters, ignoring case and accents. The apostrophe
//!    sorts before every letter, and a word sorts before its own extensions.
//! 2. **secondary** - unaccented before accented (`cafe` < `café`).
//! 3. **tertiary** - lowercase before uppercase (`a` < `A`).
//! 4. code point order, so two different words never compare equal.
//!
//! This is independent of the process locale.

use std::cmp::Ordering;

/// Primary weight classes, lowest first
const CLASS_PUNCTUATION: u8 = 0;
const CLASS_LETTER: u8 = 1;
const CLASS_OTHER: u8 = 2;

fn base_letter(c: char) -> Option<char> {
    match c {
        'é' | 'É' => Some('e'),
        c if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase()),
        c if c.is_alphabetic() => c.to_lowercase().next(),
        _ => None,
    }
}

fn primary(c: char) -> (u8, char) {
    match base_letter(c) {
        Some(base) => (CLASS_LETTER, base),
        None if c == '\'' => (CLASS_PUNCTUATION, c),
        None => (CLASS_OTHER, c),
    }
}

fn secondary(c: char) -> bool {
    matches!(c, 'é' | 'É')
}

fn tertiary(c: char) -> bool {
    c.is_uppercase()
}

/// Compares two words for alphabetical display order.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary)
        .cmp(b.chars().map(primary))
        .then_with(|| a.chars().map(secondary).cmp(b.chars().map(secondary)))
        .then_with(|| a.chars().map(tertiary).cmp(b.chars().map(tertiary)))
        .then_with(|| a.cmp(b))
}
