use crate::types::TokenizedLine;

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> TokenizedLine;
}
