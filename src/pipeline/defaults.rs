use crate::diff::tokenization::tokenize;
use crate::pipeline::traits::Tokenizer;
use crate::types::TokenizedLine;

pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> TokenizedLine {
        tokenize(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_tokenizer_delegates_to_tokenization() {
        let tokenizer = WordTokenizer;
        let line = tokenizer.tokenize("Hello, World");
        assert_eq!(line, tokenize("Hello, World"));
        assert_eq!(line.normalized, ["hello", "world"]);
    }
}
