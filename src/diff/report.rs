use serde::Serialize;

use crate::types::{OpTag, Opcode, TokenizedLine};

/// How a rendered segment relates to the scripted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Spoken text that matches the script.
    Correct,
    /// Spoken text that is not in the script.
    Extra,
    /// Scripted text the performer did not deliver.
    Missed,
}

/// A run of display text with a single verdict. `text` is built from the
/// original (unnormalized) substrings, so it reads like the source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSegment {
    pub verdict: Verdict,
    pub text: String,
}

/// The reviewed comparison of one delivered line against its scripted line.
#[derive(Debug, Clone, Serialize)]
pub struct LineReview {
    pub segments: Vec<ReviewSegment>,
    pub opcodes: Vec<Opcode>,
    pub script_token_count: usize,
    pub spoken_token_count: usize,
    pub matched_token_count: usize,
}

impl LineReview {
    /// Fraction of script tokens the performer delivered, in `[0, 1]`.
    /// An empty scripted line counts as fully delivered.
    pub fn accuracy(&self) -> f64 {
        if self.script_token_count == 0 {
            1.0
        } else {
            self.matched_token_count as f64 / self.script_token_count as f64
        }
    }
}

/// Maps an opcode sequence back onto the original substrings of both lines.
///
/// EQUAL and INSERT render the spoken side (as `Correct` and `Extra`);
/// DELETE renders the script side (`Missed`); REPLACE renders the spoken
/// side as `Extra` followed by the script side as `Missed`.
pub fn build_review(
    opcodes: &[Opcode],
    script_line: &TokenizedLine,
    spoken_line: &TokenizedLine,
) -> LineReview {
    let mut segments = Vec::with_capacity(opcodes.len());
    let mut matched = 0usize;

    for op in opcodes {
        match op.tag {
            OpTag::Equal => {
                matched += op.a_end - op.a_begin;
                segments.push(ReviewSegment {
                    verdict: Verdict::Correct,
                    text: join(&spoken_line.original, op.b_begin, op.b_end),
                });
            }
            OpTag::Insert => segments.push(ReviewSegment {
                verdict: Verdict::Extra,
                text: join(&spoken_line.original, op.b_begin, op.b_end),
            }),
            OpTag::Delete => segments.push(ReviewSegment {
                verdict: Verdict::Missed,
                text: join(&script_line.original, op.a_begin, op.a_end),
            }),
            OpTag::Replace => {
                segments.push(ReviewSegment {
                    verdict: Verdict::Extra,
                    text: join(&spoken_line.original, op.b_begin, op.b_end),
                });
                segments.push(ReviewSegment {
                    verdict: Verdict::Missed,
                    text: join(&script_line.original, op.a_begin, op.a_end),
                });
            }
        }
    }

    LineReview {
        segments,
        opcodes: opcodes.to_vec(),
        script_token_count: script_line.len(),
        spoken_token_count: spoken_line.len(),
        matched_token_count: matched,
    }
}

fn join(original: &[String], begin: usize, end: usize) -> String {
    original[begin..end].concat()
}
