//! Action line matching.
//!
//! Recognizes the line syntaxes planners use for plan steps, tried in order:
//!
//! 1. `<time>: (<name> <args...>)`, optionally followed by `[D:<n>]` or `[<n>]`.
//! 2. `step <n>: <name> <args...>` (the `step` keyword is optional).
//! 3. `(<name> <args...>)` with no time prefix; the time is the number of
//!    actions matched before it.

use std::sync::LazyLock;

use regex::Regex;

static TIMED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d+(?:\.\d+)?)\s*:\s*\(([^()]*)\)(?:\s*\[\s*(?:[Dd]\s*:\s*)?(\d+(?:\.\d+)?)\s*\])?",
    )
    .expect("timed action regex")
});

static STEP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:step\s+)?(\d+)\s*:\s*([^(\s].*)$").expect("step action regex")
});

static BARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(([^()]*)\)").expect("bare action regex"));

/// Which syntax a line matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSyntax {
    Timed,
    Step,
    Bare,
}

/// An action as read off a single line, before classification.
#[derive(Debug, Clone, PartialEq)]
pub struct RawAction {
    pub time: f64,
    /// Lowercased action name.
    pub name: String,
    pub args: Vec<String>,
    /// Duration from a bracketed annotation, if the line carried one.
    pub duration: Option<f64>,
    pub syntax: LineSyntax,
}

/// Match a single normalized line.
///
/// `matched_so_far` is the number of actions already matched in this plan;
/// it becomes the time of an untimed bare action. Returns `None` for lines
/// that match no syntax or have an empty body.
pub fn match_line(line: &str, matched_so_far: usize) -> Option<RawAction> {
    if let Some(caps) = TIMED.captures(line) {
        let time = caps[1].parse().ok()?;
        let duration = caps.get(3).and_then(|m| m.as_str().parse().ok());
        return split_body(&caps[2], time, duration, LineSyntax::Timed);
    }

    if let Some(caps) = STEP.captures(line) {
        let time = caps[1].parse().ok()?;
        return split_body(&caps[2], time, None, LineSyntax::Step);
    }

    if let Some(caps) = BARE.captures(line) {
        return split_body(&caps[1], matched_so_far as f64, None, LineSyntax::Bare);
    }

    None
}

fn split_body(body: &str, time: f64, duration: Option<f64>, syntax: LineSyntax) -> Option<RawAction> {
    let mut tokens = body.split_whitespace();
    let name = tokens.next()?.to_lowercase();
    Some(RawAction {
        time,
        name,
        args: tokens.map(str::to_owned).collect(),
        duration,
        syntax,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_timed_action() {
        let action = match_line("0.0: (pick ball1 rooma wally)", 0).expect("should match");
        assert_eq!(action.time, 0.0);
        assert_eq!(action.name, "pick");
        assert_eq!(action.args, vec!["ball1", "rooma", "wally"]);
        assert_eq!(action.duration, None);
        assert_eq!(action.syntax, LineSyntax::Timed);
    }

    #[test]
    fn matches_duration_annotations() {
        let with_d = match_line("1.5: (move-up elevator1) [D:3.0]", 0).unwrap();
        assert_eq!(with_d.time, 1.5);
        assert_eq!(with_d.name, "move-up");
        assert_eq!(with_d.args, vec!["elevator1"]);
        assert_eq!(with_d.duration, Some(3.0));

        let bare_number = match_line("2.000: (drive truck1 city1 city2) [4.000]", 0).unwrap();
        assert_eq!(bare_number.duration, Some(4.0));
    }

    #[test]
    fn lowercases_name_but_not_args() {
        let action = match_line("3: (MOVE Wally RoomA RoomB)", 0).unwrap();
        assert_eq!(action.name, "move");
        assert_eq!(action.args, vec!["Wally", "RoomA", "RoomB"]);
    }

    #[test]
    fn matches_step_syntax() {
        let action = match_line("step 4: MOVE WALLY ROOMA ROOMB", 0).unwrap();
        assert_eq!(action.time, 4.0);
        assert_eq!(action.name, "move");
        assert_eq!(action.args, vec!["WALLY", "ROOMA", "ROOMB"]);
        assert_eq!(action.syntax, LineSyntax::Step);

        let indented = match_line("12: board p1 f3", 0).unwrap();
        assert_eq!(indented.time, 12.0);
        assert_eq!(indented.name, "board");
    }

    #[test]
    fn bare_action_uses_running_index() {
        let action = match_line("(drop ball1 roomb wally)", 7).unwrap();
        assert_eq!(action.time, 7.0);
        assert_eq!(action.name, "drop");
        assert_eq!(action.syntax, LineSyntax::Bare);
    }

    #[test]
    fn tolerates_trailing_residue() {
        let action = match_line("0.003: (load pkg1 truck1 city1) [1] ; cost 1", 0).unwrap();
        assert_eq!(action.duration, Some(1.0));
        assert_eq!(action.args, vec!["pkg1", "truck1", "city1"]);
    }

    #[test]
    fn unparsable_lines_are_skipped() {
        assert!(match_line("Solution found!", 0).is_none());
        assert!(match_line("0.5: move a b", 0).is_none());
        assert!(match_line("()", 0).is_none());
        assert!(match_line("1: ( )", 0).is_none());
    }
}
