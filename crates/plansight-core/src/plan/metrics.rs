//! Planner statistics extracted from diagnostic lines.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Statistics reported by the planner alongside the plan.
///
/// Every field is optional and only set when its line was observed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_length: Option<u64>,
    /// Milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planning_time: Option<u64>,
    /// Milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_time: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expanded_nodes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states_evaluated: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
}

#[derive(Debug, Clone, Copy)]
enum Statistic {
    PlanLength,
    PlanningTime,
    SearchTime,
    ExpandedNodes,
    StatesEvaluated,
    TotalCost,
}

/// Recognized `key:` prefixes (lowercase).
const PATTERNS: &[(&str, Statistic)] = &[
    ("plan-length:", Statistic::PlanLength),
    ("planning time (msec):", Statistic::PlanningTime),
    ("search time (msec):", Statistic::SearchTime),
    ("expanded nodes:", Statistic::ExpandedNodes),
    ("states evaluated:", Statistic::StatesEvaluated),
    ("metric (search):", Statistic::TotalCost),
];

impl Metrics {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Inspect one rejected line and record any statistic it carries.
    ///
    /// Returns `true` if the line matched a known statistic with a numeric
    /// value. Unknown lines are ignored.
    pub fn observe(&mut self, line: &str) -> bool {
        let lower = line.to_ascii_lowercase();
        let Some(statistic) = PATTERNS
            .iter()
            .find(|(key, _)| lower.contains(key))
            .map(|(_, statistic)| *statistic)
        else {
            return false;
        };
        let Some(value) = trailing_number(line) else {
            return false;
        };

        debug!(?statistic, value, "recorded planner statistic");
        match statistic {
            Statistic::PlanLength => self.plan_length = Some(as_count(value)),
            Statistic::PlanningTime => self.planning_time = Some(as_count(value)),
            Statistic::SearchTime => self.search_time = Some(as_count(value)),
            Statistic::ExpandedNodes => self.expanded_nodes = Some(as_count(value)),
            Statistic::StatesEvaluated => self.states_evaluated = Some(as_count(value)),
            Statistic::TotalCost => self.total_cost = Some(value),
        }
        true
    }

    /// Build metrics from a sequence of rejected lines.
    pub fn extract<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut metrics = Self::default();
        for line in lines {
            metrics.observe(line);
        }
        metrics
    }
}

/// Parse the last whitespace- or colon-separated token as a number.
fn trailing_number(line: &str) -> Option<f64> {
    let token = line
        .rsplit(|c: char| c.is_whitespace() || c == ':')
        .find(|t| !t.is_empty())?;
    let value: f64 = token.trim_end_matches([',', ';', '.']).parse().ok()?;
    value.is_finite().then_some(value)
}

fn as_count(value: f64) -> u64 {
    if value <= 0.0 { 0 } else { value as u64 }
}
