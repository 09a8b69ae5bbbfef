use std::io::{self, BufRead, Write};
use std::path::Path;

use dys_session::{
    JsonReportSink, RejectReason, ReportSink, ScreeningSession, SentenceCorpus, SentenceSource,
    SessionError, SessionMetadata, SessionReport, SubmitResponse,
};

use super::ScorerPaths;
use crate::render;

#[derive(Debug, thiserror::Error)]
pub enum InteractiveError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Session(#[from] SessionError),
}

pub struct ScreeningOptions {
    pub corpus: String,
    pub scorer: ScorerPaths,
    pub attempts: usize,
    pub report_dir: String,
    pub name: Option<String>,
    pub id: Option<String>,
    pub seed: Option<u64>,
}

/// Print `prompt` and read one line. `None` on end of input.
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}

/// Drive a session over a line-oriented terminal until every attempt is used
/// or input ends. Ending input early keeps the attempts accepted so far.
pub fn run_interactive<S, R, W>(
    session: &mut ScreeningSession<S>,
    input: &mut R,
    out: &mut W,
) -> Result<(), InteractiveError>
where
    S: SentenceSource,
    R: BufRead,
    W: Write,
{
    while let Some(attempt) = session.attempt_number() {
        let reference = session.current_reference()?.to_string();
        writeln!(
            out,
            "\nAttempt {attempt}/{}. Type this sentence:\n  {reference}",
            session.max_attempts()
        )?;
        let Some(response) = prompt_line(input, out, "> ")? else {
            writeln!(out)?;
            break;
        };

        match session.submit(&response) {
            Ok(SubmitResponse::Accepted { .. }) => {
                if let Some(record) = session.attempts().last() {
                    writeln!(out, "{}", render::format_attempt(record, session.max_attempts()))?;
                }
            }
            Ok(SubmitResponse::Rejected(RejectReason::Empty)) => {
                writeln!(out, "Nothing was typed. Please try again.")?;
            }
            Ok(SubmitResponse::Rejected(RejectReason::TooDifferent { similarity })) => {
                writeln!(
                    out,
                    "That doesn't look like the sentence (similarity {similarity}). Please try again."
                )?;
            }
            Err(SessionError::Score(e)) => {
                writeln!(out, "Could not score that response ({e}). Please try again.")?;
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

fn subject_field<R: BufRead, W: Write>(
    given: Option<String>,
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<String> {
    match given {
        Some(v) => Ok(v),
        None => Ok(prompt_line(input, out, prompt)?.unwrap_or_default()),
    }
}

/// Full screening run: load, ask for the subject, run the session, print the
/// summary and write the JSON report.
pub fn screen<R: BufRead, W: Write>(
    opts: ScreeningOptions,
    input: &mut R,
    out: &mut W,
) -> Result<SessionReport, Box<dyn std::error::Error>> {
    let scorer = opts.scorer.load()?;
    let mut corpus = SentenceCorpus::open(Path::new(&opts.corpus))?;
    if let Some(seed) = opts.seed {
        corpus = corpus.with_seed(seed);
    }
    let mut session = ScreeningSession::new(corpus, scorer, opts.attempts)?;

    let name = subject_field(opts.name, input, out, "Subject name: ")?;
    let id = subject_field(opts.id, input, out, "Subject ID: ")?;
    let metadata = SessionMetadata::new(name, id);

    run_interactive(&mut session, input, out)?;

    let report = session.finish(metadata);
    write!(out, "\n{}", render::format_summary(&report))?;

    let mut sink = JsonReportSink::new(&opts.report_dir);
    sink.write(&report)?;
    for path in sink.written() {
        writeln!(out, "Report saved to {}", path.display())?;
    }
    Ok(report)
}

pub fn dystest(opts: ScreeningOptions) {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    die!(screen(opts, &mut input, &mut out), "Error: {}");
}
