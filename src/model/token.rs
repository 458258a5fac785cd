// Tokenizer - text normalization and word splitting

/// A word extracted from the input text. Borrows from the text it came from.
pub type Token<'a> = &'a str;

/// The single accented letter kept inside words, in both cases.
pub const ACCENTED_LETTERS: [char; 2] = ['é', 'É'];

/// Returns true if `c` belongs inside a word.
///
/// Everything else (digits, punctuation, symbols, other accented letters)
/// acts as a separator, the same as whitespace.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '\'' || ACCENTED_LETTERS.contains(&c)
}

/// Splits `text` into tokens in reading order.
///
/// Equivalent to replacing every non-word character with a space and then
/// splitting on whitespace, but without allocating an intermediate string.
/// Empty or whitespace-only input yields no tokens.
pub fn tokenize_text(text: &str) -> Vec<Token<'_>> {
    text.split(|c: char| !is_word_char(c))
        .filter(|word| !word.is_empty())
        .collect()
}
