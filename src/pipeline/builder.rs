use crate::pipeline::defaults::WordTokenizer;
use crate::pipeline::runtime::{LineReviewer, LineReviewerParts};
use crate::pipeline::traits::Tokenizer;

#[derive(Default)]
pub struct LineReviewerBuilder {
    tokenizer: Option<Box<dyn Tokenizer>>,
}

impl LineReviewerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    pub fn build(self) -> LineReviewer {
        LineReviewer::from_parts(LineReviewerParts {
            tokenizer: self.tokenizer.unwrap_or_else(|| Box::new(WordTokenizer)),
        })
    }
}
