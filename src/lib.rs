pub mod diff;
pub mod error;
pub mod pipeline;
pub mod script;
pub mod types;

pub use diff::matcher::SequenceMatcher;
pub use diff::report::{build_review, LineReview, ReviewSegment, Verdict};
pub use diff::tokenization::tokenize;
pub use error::CuecheckError;
pub use pipeline::builder::LineReviewerBuilder;
pub use pipeline::defaults::WordTokenizer;
pub use pipeline::runtime::LineReviewer;
pub use pipeline::traits::Tokenizer;
pub use script::{Script, Turn};
pub use types::{Match, OpTag, Opcode, TokenizedLine};
