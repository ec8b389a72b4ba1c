//! Lossy conversion of actions between dialects.
//!
//! Converting never mutates the input, and converting back does not restore
//! what a previous conversion stripped.

use crate::dialect::Dialect;
use crate::plan::Action;

/// Re-express `action` under the `to` dialect.
///
/// - parallel -> sequential drops `duration` and `end`;
///   sequential -> parallel sets `duration` to the target's default and
///   recomputes `end`.
/// - cost -> no cost drops `cost`; no cost -> cost sets it to 1.0.
pub fn convert_action(action: &Action, from: Dialect, to: Dialect) -> Action {
    let (src, dst) = (from.capabilities(), to.capabilities());
    let mut converted = action.clone();

    match (src.supports_parallel, dst.supports_parallel) {
        (true, false) => {
            converted.duration = None;
            converted.end = None;
        }
        (false, true) => {
            converted.duration = Some(dst.default_duration);
            converted.end = Some(converted.time + dst.default_duration);
        }
        _ => {}
    }

    match (src.supports_cost, dst.supports_cost) {
        (true, false) => converted.cost = None,
        (false, true) => converted.cost = Some(1.0),
        _ => {}
    }

    converted
}

pub fn convert_actions(actions: &[Action], from: Dialect, to: Dialect) -> Vec<Action> {
    actions
        .iter()
        .map(|a| convert_action(a, from, to))
        .collect()
}
