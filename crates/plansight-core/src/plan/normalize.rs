//! Line normalization: split planner output into candidate action lines,
//! separating out comments and planner diagnostics.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Substrings that mark a line as planner diagnostics rather than a plan step.
/// Matched case-insensitively.
pub const NOISE_MARKERS: &[&str] = &[
    "domain parsed",
    "problem parsed",
    "grounding",
    "planning time",
    "plan-length",
    "metric",
    "expanded nodes",
    "|f|",
    "g(n)=",
    "h(n)=",
    "problem solved",
    "found plan:",
    "heuristic time",
    "search time",
    "states evaluated",
    "dead-ends detected",
    "duplicates detected",
];

/// Prefixes that mark a whole line as a comment.
pub const COMMENT_MARKERS: &[&str] = &[";", "//", "*", "#"];

static DEFINITION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\(\s*define\s*\(\s*(domain|problem)\b").expect("definition header regex")
});

/// Which kind of planning-language definition a file contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefinitionKind {
    Domain,
    Problem,
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain => f.write_str("domain"),
            Self::Problem => f.write_str("problem"),
        }
    }
}

/// Detect a domain or problem definition header anywhere in `content`.
///
/// Returns the kind of the first header found.
pub fn detect_definition(content: &str) -> Option<DefinitionKind> {
    let caps = DEFINITION_HEADER.captures(content)?;
    if caps[1].eq_ignore_ascii_case("domain") {
        Some(DefinitionKind::Domain)
    } else {
        Some(DefinitionKind::Problem)
    }
}

/// Lines of a plan file after normalization, borrowed from the input.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct NormalizedLines<'a> {
    /// Trimmed lines that may contain an action, in input order.
    pub candidates: Vec<&'a str>,
    /// Comment bodies and diagnostic lines, kept for statistics extraction.
    pub rejected: Vec<&'a str>,
}

/// Split `content` into trimmed candidate lines.
///
/// Blank lines are dropped. Comment lines (their marker stripped) and lines
/// containing a [`NOISE_MARKERS`] entry go to `rejected`.
pub fn normalize(content: &str) -> NormalizedLines<'_> {
    let mut out = NormalizedLines::default();

    for line in content.lines().map(str::trim) {
        if line.is_empty() {
            continue;
        }
        if let Some(body) = strip_comment(line) {
            out.rejected.push(body);
            continue;
        }
        if is_noise(line) {
            out.rejected.push(line);
            continue;
        }
        out.candidates.push(line);
    }

    out
}

fn strip_comment(line: &str) -> Option<&str> {
    COMMENT_MARKERS
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
        .map(str::trim)
}

/// Whether `line` contains one of the planner diagnostic markers.
pub fn is_noise(line: &str) -> bool {
    let lower = line.to_ascii_lowercase();
    NOISE_MARKERS.iter().any(|marker| lower.contains(marker))
}
