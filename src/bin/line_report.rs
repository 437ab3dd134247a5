use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use clap::Parser;
use cuecheck::{CuecheckError, LineReview, LineReviewerBuilder, Script, Verdict};

/// Rehearse one speaker's lines against a script and report discrepancies.
///
/// Without `--speaker`, lists the speakers found in the script. With one,
/// walks the script in order: other speakers' turns are printed as cues,
/// and for each of the chosen speaker's turns an attempt is read from
/// stdin and reviewed against the scripted text.
#[derive(Parser)]
#[command(name = "line_report")]
struct Args {
    /// Script file in the `=NAME=` header format
    script: PathBuf,

    /// Speaker whose lines are rehearsed
    #[arg(long)]
    speaker: Option<String>,

    /// Emit each review as a JSON object instead of annotated text
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CuecheckError> {
    let file = File::open(&args.script).map_err(|e| CuecheckError::Io {
        context: "opening script file",
        source: e,
    })?;
    let script = Script::parse(BufReader::new(file))?;

    if script.speakers.is_empty() {
        return Err(CuecheckError::InvalidInput {
            message: "script contains no speakers".to_string(),
        });
    }
    if script.turns.is_empty() {
        return Err(CuecheckError::InvalidInput {
            message: "script contains no lines".to_string(),
        });
    }

    let Some(speaker) = args.speaker else {
        let mut names: Vec<&String> = script.speakers.iter().collect();
        names.sort();
        for name in names {
            println!("{name}");
        }
        return Ok(());
    };
    let speaker = speaker.to_uppercase();
    if !script.speakers.contains(&speaker) {
        return Err(CuecheckError::InvalidInput {
            message: format!("speaker {speaker:?} not found in script"),
        });
    }

    let mut reviewer = LineReviewerBuilder::new().build();
    let stdin = io::stdin();
    let mut attempts = stdin.lock().lines();

    for turn in &script.turns {
        if turn.speaker != speaker {
            println!("{}:{}", turn.speaker, turn.text);
            continue;
        }

        print!("{speaker}> ");
        io::stdout()
            .flush()
            .map_err(|e| CuecheckError::Io {
                context: "flushing prompt",
                source: e,
            })?;

        let Some(attempt) = attempts.next() else {
            break;
        };
        let attempt = attempt.map_err(|e| CuecheckError::Io {
            context: "reading attempt",
            source: e,
        })?;

        let review = reviewer.review(&turn.text, &attempt);
        if args.json {
            let rendered = serde_json::to_string(&review).map_err(|e| CuecheckError::Json {
                context: "rendering review",
                source: e,
            })?;
            println!("{rendered}");
        } else {
            println!("{}", render_text(&review));
            println!("accuracy: {:.0}%", review.accuracy() * 100.0);
        }
    }

    Ok(())
}

/// Annotates extra spoken text as `{+ ... +}` and missed script text as
/// `[- ... -]`; correct text passes through untouched.
fn render_text(review: &LineReview) -> String {
    let mut out = String::new();
    for segment in &review.segments {
        match segment.verdict {
            Verdict::Correct => out.push_str(&segment.text),
            Verdict::Extra => {
                out.push_str("{+");
                out.push_str(&segment.text);
                out.push_str("+}");
            }
            Verdict::Missed => {
                out.push_str("[-");
                out.push_str(&segment.text);
                out.push_str("-]");
            }
        }
    }
    out
}
