use crate::diff::matcher::SequenceMatcher;
use crate::diff::report::{build_review, LineReview};
use crate::pipeline::traits::Tokenizer;

/// Reviews delivered lines against their scripted counterparts.
///
/// The reviewer keeps one [`SequenceMatcher`] across calls; when the same
/// scripted line is reviewed repeatedly (the common rehearsal loop), the
/// matcher's value-equality check keeps sequence A and its caches warm and
/// only the spoken side is rebuilt.
pub struct LineReviewer {
    tokenizer: Box<dyn Tokenizer>,
    matcher: SequenceMatcher,
}

pub(crate) struct LineReviewerParts {
    pub tokenizer: Box<dyn Tokenizer>,
}

impl LineReviewer {
    pub(crate) fn from_parts(parts: LineReviewerParts) -> Self {
        Self {
            tokenizer: parts.tokenizer,
            matcher: SequenceMatcher::new(Vec::new(), Vec::new()),
        }
    }

    pub fn review(&mut self, scripted: &str, spoken: &str) -> LineReview {
        let script_line = self.tokenizer.tokenize(scripted);
        let spoken_line = self.tokenizer.tokenize(spoken);

        self.matcher
            .set_seqs(script_line.normalized.clone(), spoken_line.normalized.clone());

        let review = build_review(self.matcher.opcodes(), &script_line, &spoken_line);
        tracing::debug!(
            script_tokens = review.script_token_count,
            spoken_tokens = review.spoken_token_count,
            matched_tokens = review.matched_token_count,
            segments = review.segments.len(),
            "reviewer: line reviewed"
        );
        review
    }
}
