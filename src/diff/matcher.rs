use std::collections::HashMap;

use crate::error::CuecheckError;
use crate::types::{Match, OpTag, Opcode};

/// Compares two token sequences A and B and derives the minimal edit script
/// between them, in the lineage of Python's `difflib.SequenceMatcher`
/// (Ratcliff-Obershelp longest-matching-block matching, without junk
/// filtering).
///
/// A is the reference (the scripted line) and B the candidate (the spoken
/// line). The position index over B, the matching blocks and the opcodes are
/// cached per instance and invalidated lazily when a sequence is reassigned
/// to one that differs element-wise; reassigning an equal sequence keeps the
/// caches. An instance is single-threaded state, callers must serialize
/// access.
pub struct SequenceMatcher {
    a: Vec<String>,
    b: Vec<String>,
    /// Token of B -> ascending positions where it occurs in B.
    b2j: HashMap<String, Vec<usize>>,
    matching_blocks: Option<Vec<Match>>,
    opcodes: Option<Vec<Opcode>>,
}

/// Unsearched sub-range of the divide-and-conquer work list.
struct SubRange {
    a_begin: usize,
    a_end: usize,
    b_begin: usize,
    b_end: usize,
}

impl SequenceMatcher {
    pub fn new(a: Vec<String>, b: Vec<String>) -> Self {
        let mut matcher = Self {
            a: Vec::new(),
            b: Vec::new(),
            b2j: HashMap::new(),
            matching_blocks: None,
            opcodes: None,
        };
        matcher.set_seqs(a, b);
        matcher
    }

    pub fn a(&self) -> &[String] {
        &self.a
    }

    pub fn b(&self) -> &[String] {
        &self.b
    }

    pub fn set_seqs(&mut self, a: Vec<String>, b: Vec<String>) {
        self.set_seq_a(a);
        self.set_seq_b(b);
    }

    /// Replaces sequence A. A no-op when `a` equals the current sequence
    /// element-wise, which keeps the cached blocks and opcodes valid.
    pub fn set_seq_a(&mut self, a: Vec<String>) {
        if a == self.a {
            return;
        }
        self.a = a;
        self.matching_blocks = None;
        self.opcodes = None;
    }

    /// Replaces sequence B and rebuilds its position index. A no-op when `b`
    /// equals the current sequence element-wise.
    pub fn set_seq_b(&mut self, b: Vec<String>) {
        if b == self.b {
            return;
        }
        self.b = b;
        self.matching_blocks = None;
        self.opcodes = None;
        self.rebuild_index();
    }

    fn rebuild_index(&mut self) {
        self.b2j.clear();
        for (j, token) in self.b.iter().enumerate() {
            self.b2j.entry(token.clone()).or_default().push(j);
        }
        tracing::debug!(
            tokens = self.b.len(),
            distinct = self.b2j.len(),
            "matcher: rebuilt position index for sequence b"
        );
    }

    /// Finds the longest run of identical tokens within
    /// `a[a_begin..a_end]` and `b[b_begin..b_end]`.
    ///
    /// Among equal-length candidates the leftmost in A wins, then the one
    /// starting earliest in B. Returns a zero-length match at
    /// `(a_begin, b_begin)` when the sub-ranges share no token. Range
    /// violations are a programming error and surface as
    /// [`CuecheckError::InvalidRange`].
    pub fn find_longest_match(
        &self,
        a_begin: usize,
        a_end: usize,
        b_begin: usize,
        b_end: usize,
    ) -> Result<Match, CuecheckError> {
        if a_begin > a_end || a_end > self.a.len() || b_begin > b_end || b_end > self.b.len() {
            return Err(CuecheckError::invalid_range(
                a_begin,
                a_end,
                self.a.len(),
                b_begin,
                b_end,
                self.b.len(),
            ));
        }
        Ok(self.longest_match(a_begin, a_end, b_begin, b_end))
    }

    /// Range-checked by the caller.
    fn longest_match(&self, a_begin: usize, a_end: usize, b_begin: usize, b_end: usize) -> Match {
        let mut best_i = a_begin;
        let mut best_j = b_begin;
        let mut best_len = 0usize;

        // run_lengths[j] = length of the common run ending at (i - 1, j).
        // Rebuilt from scratch each outer step: the recurrence models
        // contiguous runs only, so entries older than one step must not
        // survive.
        let mut run_lengths: HashMap<usize, usize> = HashMap::new();
        for i in a_begin..a_end {
            let mut next_run_lengths = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < b_begin {
                        continue;
                    }
                    if j >= b_end {
                        // Positions are ascending, nothing further fits.
                        break;
                    }
                    let len = match j.checked_sub(1) {
                        Some(prev) => run_lengths.get(&prev).copied().unwrap_or(0) + 1,
                        None => 1,
                    };
                    next_run_lengths.insert(j, len);
                    // Strict increase only: equal-length candidates found
                    // later in the scan never displace the first one.
                    if len > best_len {
                        best_i = i + 1 - len;
                        best_j = j + 1 - len;
                        best_len = len;
                    }
                }
            }
            run_lengths = next_run_lengths;
        }

        // Fold in equal tokens adjacent to the found run. The DP above only
        // anchors runs at indexed positions; with no junk filter every equal
        // token is indexed, so these loops are expected not to fire, but the
        // contract keeps them.
        while best_i > a_begin && best_j > b_begin && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_len += 1;
        }
        while best_i + best_len < a_end
            && best_j + best_len < b_end
            && self.a[best_i + best_len] == self.b[best_j + best_len]
        {
            best_len += 1;
        }

        Match {
            a_begin: best_i,
            b_begin: best_j,
            len: best_len,
        }
    }

    /// Returns the full alignment between A and B: matches sorted by
    /// `(a_begin, b_begin)`, non-overlapping and non-adjacent in both
    /// sequences, terminated by the `(len(A), len(B), 0)` sentinel.
    /// Computed once and cached.
    pub fn matching_blocks(&mut self) -> &[Match] {
        if self.matching_blocks.is_none() {
            self.matching_blocks = Some(self.collect_matching_blocks());
        }
        self.matching_blocks.as_deref().unwrap_or(&[])
    }

    fn collect_matching_blocks(&self) -> Vec<Match> {
        let a_len = self.a.len();
        let b_len = self.b.len();

        // Explicit work list instead of recursion; visitation order does not
        // matter because the result is sorted afterwards.
        let mut pending = vec![SubRange {
            a_begin: 0,
            a_end: a_len,
            b_begin: 0,
            b_end: b_len,
        }];
        let mut found: Vec<Match> = Vec::new();

        while let Some(range) = pending.pop() {
            let m = self.longest_match(range.a_begin, range.a_end, range.b_begin, range.b_end);
            if m.len == 0 {
                continue;
            }
            if range.a_begin < m.a_begin && range.b_begin < m.b_begin {
                pending.push(SubRange {
                    a_begin: range.a_begin,
                    a_end: m.a_begin,
                    b_begin: range.b_begin,
                    b_end: m.b_begin,
                });
            }
            if m.a_end() < range.a_end && m.b_end() < range.b_end {
                pending.push(SubRange {
                    a_begin: m.a_end(),
                    a_end: range.a_end,
                    b_begin: m.b_end(),
                    b_end: range.b_end,
                });
            }
            found.push(m);
        }

        merge_adjacent(found, a_len, b_len)
    }

    /// Returns the ordered edit script turning A into B. The opcode ranges
    /// partition `[0, len(A))` and `[0, len(B))` with no gaps and no
    /// overlaps. Computed once and cached.
    pub fn opcodes(&mut self) -> &[Opcode] {
        if self.opcodes.is_none() {
            self.matching_blocks();
            let blocks = self.matching_blocks.as_deref().unwrap_or(&[]);

            let mut ops = Vec::with_capacity(blocks.len() * 2);
            let mut a_index = 0usize;
            let mut b_index = 0usize;

            for m in blocks {
                let gap_tag = if a_index < m.a_begin && b_index < m.b_begin {
                    Some(OpTag::Replace)
                } else if a_index < m.a_begin {
                    Some(OpTag::Delete)
                } else if b_index < m.b_begin {
                    Some(OpTag::Insert)
                } else {
                    None
                };
                if let Some(tag) = gap_tag {
                    ops.push(Opcode {
                        tag,
                        a_begin: a_index,
                        a_end: m.a_begin,
                        b_begin: b_index,
                        b_end: m.b_begin,
                    });
                }

                a_index = m.a_end();
                b_index = m.b_end();

                // The sentinel has len 0 and never contributes an EQUAL.
                if m.len > 0 {
                    ops.push(Opcode {
                        tag: OpTag::Equal,
                        a_begin: m.a_begin,
                        a_end: a_index,
                        b_begin: m.b_begin,
                        b_end: b_index,
                    });
                }
            }

            self.opcodes = Some(ops);
        }
        self.opcodes.as_deref().unwrap_or(&[])
    }
}

/// Sorts the collected matches by `(a_begin, b_begin, len)`, collapses runs
/// that are exactly adjacent in both sequences into one match, and appends
/// the `(a_len, b_len, 0)` sentinel.
fn merge_adjacent(mut found: Vec<Match>, a_len: usize, b_len: usize) -> Vec<Match> {
    found.sort();

    let mut merged: Vec<Match> = Vec::with_capacity(found.len() + 1);
    let mut run = Match {
        a_begin: 0,
        b_begin: 0,
        len: 0,
    };
    for m in found {
        if run.a_end() == m.a_begin && run.b_end() == m.b_begin {
            run.len += m.len;
        } else {
            if run.len > 0 {
                merged.push(run);
            }
            run = m;
        }
    }
    if run.len > 0 {
        merged.push(run);
    }

    merged.push(Match {
        a_begin: a_len,
        b_begin: b_len,
        len: 0,
    });
    merged
}
