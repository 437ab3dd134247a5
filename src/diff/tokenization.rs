use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::types::TokenizedLine;

const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
const WHITESPACE: &str = " \t\n\r\u{b}\u{c}";

/// Splits `text` into word tokens, producing the two index-aligned views of
/// [`TokenizedLine`].
///
/// Punctuation and whitespace act only as separators. Each original
/// substring keeps the separators that follow its word (and the first token
/// keeps any leading ones), so concatenating `original` reproduces `text`
/// exactly. A separator-only tail is still flushed as a final token whose
/// normalized form is empty.
pub fn tokenize(text: &str) -> TokenizedLine {
    let mut original = Vec::new();
    let mut normalized = Vec::new();

    let mut current_original = String::new();
    let mut current_word = String::new();

    let chars: Vec<char> = text.chars().collect();
    for (idx, &c) in chars.iter().enumerate() {
        current_original.push(c);
        if is_word_char(c) {
            current_word.push(c);
        }

        let boundary = match chars.get(idx + 1) {
            None => true,
            Some(&next) => !is_word_char(c) && is_word_char(next) && !current_word.is_empty(),
        };
        if boundary {
            original.push(std::mem::take(&mut current_original));
            normalized.push(normalize_word(&current_word));
            current_word.clear();
        }
    }

    TokenizedLine {
        original,
        normalized,
    }
}

fn is_word_char(c: char) -> bool {
    !PUNCTUATION.contains(c) && !WHITESPACE.contains(c)
}

/// Lowercases and strips accents by dropping the combining marks of the NFD
/// decomposition.
fn normalize_word(word: &str) -> String {
    word.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}
