//! Record parser for the line-oriented problem format.
//!
//! ```text
//! C <name> H:<int> E:<int> P:<int>
//! J <name> H:<int> E:<int> P:<int> <slot>[,<slot>...]
//! ```
//!
//! Record tags and axis labels are case-insensitive and the three axes may
//! appear in any order. Blank lines and lines starting with `#` are skipped.

use std::fs;
use std::path::{Path, PathBuf};

use slotmatch_core::{Axis, ProblemError, Roster, RosterBuilder, TalentVector};
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading problem records.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The first token is not a known record tag
    #[error("line {line}: unrecognised record '{text}'")]
    UnknownRecord { line: usize, text: String },

    /// The record has the wrong shape
    #[error("line {line}: expected {expected} in '{text}'")]
    Malformed {
        line: usize,
        expected: &'static str,
        text: String,
    },

    /// A rating that is not a non-negative integer
    #[error("line {line}: invalid rating '{text}'")]
    InvalidRating { line: usize, text: String },

    /// The record is well formed but breaks a problem rule
    #[error("line {line}: {source}")]
    Problem {
        line: usize,
        #[source]
        source: ProblemError,
    },

    /// The records as a whole do not form a valid problem
    #[error(transparent)]
    Build(#[from] ProblemError),
}

/// Result type alias for parsing
pub type Result<T> = std::result::Result<T, ParseError>;

/// Parses problem records from a string.
///
/// # Examples
///
/// ```
/// use slotmatch::roster::parse_str;
///
/// let roster = parse_str("\
/// C C0 H:1 E:0 P:0
/// J J0 H:4 E:2 P:1 C0
/// ").unwrap();
///
/// assert_eq!(roster.capacity(), 1);
/// assert_eq!(roster.applicant_by_name("J0").unwrap().preferences()[0].score(), 4);
/// ```
pub fn parse_str(input: &str) -> Result<Roster> {
    let mut builder = RosterBuilder::new();

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        parse_record(&mut builder, line, text)?;
    }

    debug!(
        event = "parsed",
        slots = builder.slot_count(),
        applicants = builder.applicant_count(),
    );
    Ok(builder.build()?)
}

/// Reads and parses a problem file.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Roster> {
    let path = path.as_ref();
    let input = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&input)
}

fn parse_record(builder: &mut RosterBuilder, line: usize, text: &str) -> Result<()> {
    let mut tokens = text.split_whitespace();
    let tag = tokens.next().unwrap_or_default();
    let malformed = |expected| ParseError::Malformed {
        line,
        expected,
        text: text.to_string(),
    };
    let problem = |source| ParseError::Problem { line, source };

    let is_slot = if tag.eq_ignore_ascii_case("C") {
        true
    } else if tag.eq_ignore_ascii_case("J") {
        false
    } else {
        return Err(ParseError::UnknownRecord {
            line,
            text: text.to_string(),
        });
    };

    let name = tokens.next().ok_or_else(|| malformed("a name"))?;
    let mut ratings = Vec::with_capacity(Axis::ALL.len());
    for _ in Axis::ALL {
        let token = tokens.next().ok_or_else(|| malformed("three talent ratings"))?;
        ratings.push(parse_rating(line, token)?);
    }
    let talent = TalentVector::from_pairs(ratings).map_err(problem)?;

    if is_slot {
        if tokens.next().is_some() {
            return Err(malformed("nothing after the talent ratings"));
        }
        builder.add_slot(name, talent).map_err(problem)?;
        return Ok(());
    }

    let prefs = tokens.next().ok_or_else(|| malformed("a preference list"))?;
    if tokens.next().is_some() {
        return Err(malformed("nothing after the preference list"));
    }
    let prefs: Vec<&str> = prefs.split(',').collect();
    if prefs.iter().any(|slot| slot.is_empty()) {
        return Err(malformed("comma-separated slot names"));
    }
    builder.add_applicant(name, talent, prefs).map_err(problem)?;
    Ok(())
}

fn parse_rating(line: usize, token: &str) -> Result<(Axis, u32)> {
    let (label, value) = token.split_once(':').ok_or_else(|| ParseError::Malformed {
        line,
        expected: "<axis>:<rating>",
        text: token.to_string(),
    })?;
    let axis: Axis = label
        .parse()
        .map_err(|source| ParseError::Problem { line, source })?;
    let rating = value.parse().map_err(|_| ParseError::InvalidRating {
        line,
        text: token.to_string(),
    })?;
    Ok((axis, rating))
}
