use serde::Serialize;

/// Edit operation kind for one [`Opcode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpTag {
    Equal,
    Replace,
    Delete,
    Insert,
}

/// One edit instruction turning a slice of sequence A into a slice of
/// sequence B. Ranges are 0-based and half-open, `[begin, end)`.
///
/// The full opcode list covers `[0, len(A))` and `[0, len(B))` exactly once
/// each: opcode `i`'s `a_end`/`b_end` equal opcode `i + 1`'s
/// `a_begin`/`b_begin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Opcode {
    pub tag: OpTag,
    pub a_begin: usize,
    pub a_end: usize,
    pub b_begin: usize,
    pub b_end: usize,
}

/// A maximal run of identical tokens at corresponding positions in both
/// sequences: `a[a_begin + k] == b[b_begin + k]` for all `k < len`.
///
/// Ordering is derived field by field, so matches sort by
/// `(a_begin, b_begin, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Match {
    pub a_begin: usize,
    pub b_begin: usize,
    pub len: usize,
}

impl Match {
    pub fn a_end(&self) -> usize {
        self.a_begin + self.len
    }

    pub fn b_end(&self) -> usize {
        self.b_begin + self.len
    }
}

/// A line of text split into tokens, kept in two index-aligned views.
///
/// `original[i]` is the raw substring the token came from (separators ride
/// along, so concatenating `original` reproduces the input exactly);
/// `normalized[i]` is the lowercased, accent-stripped word used as the
/// matching alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenizedLine {
    pub original: Vec<String>,
    pub normalized: Vec<String>,
}

impl TokenizedLine {
    pub fn len(&self) -> usize {
        self.normalized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}
