//! Puzzle fragment matching within a single log line.

use regex::Regex;
use std::sync::OnceLock;

/// Non-whitespace run around `puzzle`, with at least one character on each side.
const PUZZLE_PATTERN: &str = r"\S+puzzle+\S+";

static PUZZLE_RE: OnceLock<Regex> = OnceLock::new();

fn puzzle_re() -> &'static Regex {
    PUZZLE_RE.get_or_init(|| Regex::new(PUZZLE_PATTERN).expect("puzzle regex"))
}

/// Returns the first puzzle fragment in `line`, if any.
///
/// For a request line like `"GET /~foo/puzzle-bar-aaab.jpg HTTP/1.0"` this is
/// the request path `/~foo/puzzle-bar-aaab.jpg`.
pub fn find_puzzle_fragment(line: &str) -> Option<&str> {
    puzzle_re().find(line).map(|m| m.as_str())
}
