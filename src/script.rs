use std::collections::HashSet;
use std::io::BufRead;

use crate::error::CuecheckError;

/// One speaker turn: the speaker's name (upper-cased) and the accumulated
/// body text. Every body line is preceded by `\n`, so `text` always starts
/// with a newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub speaker: String,
    pub text: String,
}

/// A parsed script: the ordered speaker turns plus the set of distinct
/// speaker names.
///
/// The format is line oriented. A line of the form `=NAME=` starts a new
/// turn for `NAME`, a line starting with `#` is a comment, and every other
/// line is body text for the current turn. A turn is committed when a later
/// header (or end of input) finds it with both a non-empty speaker and
/// non-empty text; anything else is dropped, which silently discards the
/// empty turn a parse starts with.
#[derive(Debug, Clone, Default)]
pub struct Script {
    pub turns: Vec<Turn>,
    pub speakers: HashSet<String>,
}

impl Script {
    pub fn parse(reader: impl BufRead) -> Result<Self, CuecheckError> {
        let mut turns = Vec::new();
        let mut speakers = HashSet::new();

        let mut speaker = String::new();
        let mut text = String::new();

        for line in reader.lines() {
            let line = line.map_err(|e| CuecheckError::io("reading script line", e))?;
            if line.starts_with('#') {
                continue;
            }
            if let Some(name) = header_name(&line) {
                if !speaker.is_empty() && !text.is_empty() {
                    turns.push(Turn {
                        speaker: speaker.clone(),
                        text: std::mem::take(&mut text),
                    });
                }
                speaker = name.to_uppercase();
                // Speakers are registered at header time, even when the
                // turn never commits.
                speakers.insert(speaker.clone());
            } else {
                text.push('\n');
                text.push_str(&line);
            }
        }

        if !speaker.is_empty() && !text.is_empty() {
            turns.push(Turn { speaker, text });
        }

        tracing::debug!(
            turns = turns.len(),
            speakers = speakers.len(),
            "script: parse complete"
        );
        Ok(Script { turns, speakers })
    }
}

/// `=NAME=` headers need at least the two delimiters; shorter lines (and
/// empty ones) are body text.
fn header_name(line: &str) -> Option<&str> {
    if line.len() >= 2 && line.starts_with('=') && line.ends_with('=') {
        Some(&line[1..line.len() - 1])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Script {
        Script::parse(text.as_bytes()).expect("parse should succeed")
    }

    #[test]
    fn parses_turns_and_speakers() {
        let script = parse("=Alice=\nHello Bob.\n=bob=\nHello Alice.\nNice day.\n");
        assert_eq!(
            script.turns,
            vec![
                Turn {
                    speaker: "ALICE".to_string(),
                    text: "\nHello Bob.".to_string(),
                },
                Turn {
                    speaker: "BOB".to_string(),
                    text: "\nHello Alice.\nNice day.".to_string(),
                },
            ]
        );
        assert_eq!(script.speakers.len(), 2);
        assert!(script.speakers.contains("ALICE"));
        assert!(script.speakers.contains("BOB"));
    }

    #[test]
    fn comment_lines_are_skipped() {
        let script = parse("# stage direction\n=A=\n# aside\nline one\n");
        assert_eq!(script.turns.len(), 1);
        assert_eq!(script.turns[0].text, "\nline one");
    }

    #[test]
    fn consecutive_lines_accumulate_with_newlines() {
        let script = parse("=A=\nfirst\nsecond\nthird\n");
        assert_eq!(script.turns[0].text, "\nfirst\nsecond\nthird");
    }

    #[test]
    fn header_without_body_registers_speaker_but_no_turn() {
        let script = parse("=A=\nhello\n=B=\n");
        assert_eq!(script.turns.len(), 1);
        assert_eq!(script.turns[0].speaker, "A");
        assert!(script.speakers.contains("B"));
        assert_eq!(script.speakers.len(), 2);
    }

    #[test]
    fn body_before_first_header_carries_into_first_turn() {
        // The headerless opening turn cannot commit, so its accumulated
        // text stays and lands in the first named turn.
        let script = parse("orphan line\n=A=\nreal line\n");
        assert_eq!(script.turns.len(), 1);
        assert_eq!(script.turns[0].speaker, "A");
        assert_eq!(script.turns[0].text, "\norphan line\nreal line");
    }

    #[test]
    fn trailing_turn_commits_only_when_complete() {
        let script = parse("=A=\nhello\n=B=");
        assert_eq!(script.turns.len(), 1);

        let script = parse("=A=\nhello\n=B=\nbye");
        assert_eq!(script.turns.len(), 2);
        assert_eq!(script.turns[1].text, "\nbye");
    }

    #[test]
    fn empty_and_stub_header_lines_are_body_text() {
        let script = parse("=A=\nfirst\n\n=\nsecond\n");
        assert_eq!(script.turns.len(), 1);
        assert_eq!(script.turns[0].text, "\nfirst\n\n=\nsecond");
    }

    #[test]
    fn empty_input_yields_empty_script() {
        let script = parse("");
        assert!(script.turns.is_empty());
        assert!(script.speakers.is_empty());
    }

    #[test]
    fn repeated_speaker_is_deduplicated() {
        let script = parse("=A=\none\n=A=\ntwo\n");
        assert_eq!(script.turns.len(), 2);
        assert_eq!(script.speakers.len(), 1);
    }
}
