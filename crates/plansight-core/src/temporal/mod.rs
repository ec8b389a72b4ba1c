//! Dialect-aware timing, cost and parallelism model over parsed actions.

pub mod convert;

use serde::Serialize;

use crate::dialect::Dialect;
use crate::plan::Action;

pub use convert::{convert_action, convert_actions};

/// An interval between two consecutive event times and the actions running
/// throughout it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlice {
    pub start: f64,
    pub end: f64,
    /// Indices into the analyzed action slice.
    pub actions: Vec<usize>,
    pub parallelism: usize,
}

/// Derived plan-level figures for one dialect.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanAnalysis {
    pub dialect: Dialect,
    pub total_duration: f64,
    pub total_cost: f64,
    pub max_parallelism: usize,
    /// Sum of the sizes of all slices with more than one action. An action
    /// spanning several such slices is counted once per slice.
    pub parallel_actions: usize,
    pub time_slices: Vec<TimeSlice>,
}

/// Compute every derived figure for `actions` under `dialect`.
pub fn analyze(actions: &[Action], dialect: Dialect) -> PlanAnalysis {
    let (time_slices, max_parallelism, parallel_actions) = if dialect.supports_parallel() {
        let slices = time_slices(actions, dialect);
        let max = max_parallelism(&slices);
        let parallel = parallel_actions(&slices);
        (slices, max, parallel)
    } else {
        // Sequential dialects run one action at a time.
        (Vec::new(), usize::from(!actions.is_empty()), 0)
    };

    PlanAnalysis {
        dialect,
        total_duration: total_duration(actions, dialect),
        total_cost: total_cost(actions, dialect),
        max_parallelism,
        parallel_actions,
        time_slices,
    }
}

/// Plan makespan.
///
/// Parallel dialects report the latest action end. Sequential dialects report
/// the start of the last action in input order, which is the plan length in
/// steps rather than wall-clock time.
pub fn total_duration(actions: &[Action], dialect: Dialect) -> f64 {
    let caps = dialect.capabilities();
    if caps.supports_parallel {
        actions
            .iter()
            .map(|a| a.effective_end(caps.default_duration))
            .fold(0.0, f64::max)
    } else {
        actions.last().map_or(0.0, |a| a.time)
    }
}

/// Sum of action costs (missing costs count as 1.0), or 0 when the dialect
/// does not model cost.
pub fn total_cost(actions: &[Action], dialect: Dialect) -> f64 {
    if !dialect.supports_cost() {
        return 0.0;
    }
    actions.iter().map(|a| a.cost.unwrap_or(1.0)).sum()
}

/// Sweep action intervals and report which actions overlap between each pair
/// of consecutive distinct event times. Empty intervals are omitted.
///
/// A zero-length action has no window to occupy, so each instant holding one
/// gets a point slice `[t, t]` listing every action active at `t`. Point
/// slices sort before the window starting at the same instant.
pub fn time_slices(actions: &[Action], dialect: Dialect) -> Vec<TimeSlice> {
    let fallback = dialect.capabilities().default_duration;
    let intervals: Vec<(f64, f64)> = actions
        .iter()
        .map(|a| (a.time, a.effective_end(fallback).max(a.time)))
        .collect();

    let mut events: Vec<f64> = intervals.iter().flat_map(|&(s, e)| [s, e]).collect();
    events.sort_by(f64::total_cmp);
    events.dedup();

    let active_over = |start: f64, end: f64| -> Vec<usize> {
        intervals
            .iter()
            .enumerate()
            .filter(|(_, (s, e))| *s <= start && *e >= end)
            .map(|(i, _)| i)
            .collect()
    };

    let mut slices = Vec::new();
    for (i, &t) in events.iter().enumerate() {
        if intervals.iter().any(|&(s, e)| s == t && e == t) {
            push_slice(&mut slices, t, t, active_over(t, t));
        }
        if let Some(&next) = events.get(i + 1) {
            push_slice(&mut slices, t, next, active_over(t, next));
        }
    }
    slices
}

fn push_slice(slices: &mut Vec<TimeSlice>, start: f64, end: f64, actions: Vec<usize>) {
    if actions.is_empty() {
        return;
    }
    slices.push(TimeSlice {
        start,
        end,
        parallelism: actions.len(),
        actions,
    });
}

pub fn max_parallelism(slices: &[TimeSlice]) -> usize {
    slices.iter().map(|s| s.parallelism).max().unwrap_or(0)
}

pub fn parallel_actions(slices: &[TimeSlice]) -> usize {
    slices
        .iter()
        .filter(|s| s.parallelism > 1)
        .map(|s| s.parallelism)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{ActionKind, Roles};

    fn action(time: f64, duration: f64) -> Action {
        Action {
            time,
            name: "move".into(),
            args: vec![],
            duration: Some(duration),
            end: Some(time + duration),
            cost: None,
            action_type: ActionKind::Move,
            roles: Roles::default(),
        }
    }

    #[test]
    fn parallel_duration_is_latest_end() {
        let actions = [action(0.0, 5.0), action(1.0, 1.0), action(2.0, 1.0)];
        assert_eq!(total_duration(&actions, Dialect::Temporal), 5.0);
    }

    #[test]
    fn sequential_duration_is_last_start() {
        let actions = [action(0.0, 5.0), action(1.0, 1.0), action(2.0, 1.0)];
        assert_eq!(total_duration(&actions, Dialect::Classical), 2.0);
        assert_eq!(total_duration(&[], Dialect::Classical), 0.0);
        assert_eq!(total_duration(&[], Dialect::Temporal), 0.0);
    }

    #[test]
    fn cost_only_counts_for_cost_dialects() {
        let mut actions = vec![action(0.0, 1.0), action(1.0, 1.0)];
        actions[0].cost = Some(4.0);
        assert_eq!(total_cost(&actions, Dialect::Numerical), 5.0);
        assert_eq!(total_cost(&actions, Dialect::Classical), 0.0);
        assert_eq!(total_cost(&actions, Dialect::Temporal), 0.0);
    }

    #[test]
    fn slices_report_overlap() {
        // a: [0,4)  b: [1,3)  c: [3,5)
        let actions = [action(0.0, 4.0), action(1.0, 2.0), action(3.0, 2.0)];
        let slices = time_slices(&actions, Dialect::Temporal);

        let summary: Vec<(f64, f64, Vec<usize>)> = slices
            .iter()
            .map(|s| (s.start, s.end, s.actions.clone()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (0.0, 1.0, vec![0]),
                (1.0, 3.0, vec![0, 1]),
                (3.0, 4.0, vec![0, 2]),
                (4.0, 5.0, vec![2]),
            ]
        );
        assert_eq!(max_parallelism(&slices), 2);
        // Action 0 is in both overlapping slices and is counted twice.
        assert_eq!(parallel_actions(&slices), 4);
    }

    #[test]
    fn gaps_produce_no_slice() {
        let actions = [action(0.0, 1.0), action(5.0, 1.0)];
        let slices = time_slices(&actions, Dialect::Temporal);
        assert_eq!(slices.len(), 2);
        assert!(slices.iter().all(|s| s.parallelism == 1));
    }

    #[test]
    fn missing_end_falls_back_to_dialect_default() {
        let mut a = action(0.0, 1.0);
        a.duration = None;
        a.end = None;
        let slices = time_slices(&[a], Dialect::Temporal);
        assert_eq!(slices[0].end, 2.0);
    }

    #[test]
    fn analyze_sequential_dialect_skips_sweep() {
        let actions = [action(0.0, 4.0), action(1.0, 2.0)];
        let analysis = analyze(&actions, Dialect::Numerical);
        assert!(analysis.time_slices.is_empty());
        assert_eq!(analysis.max_parallelism, 1);
        assert_eq!(analysis.parallel_actions, 0);
        assert_eq!(analysis.total_duration, 1.0);
        assert_eq!(analysis.total_cost, 2.0);
    }

    #[test]
    fn analyze_empty_plan() {
        let analysis = analyze(&[], Dialect::PddlPlus);
        assert_eq!(analysis.max_parallelism, 0);
        assert_eq!(analysis.parallel_actions, 0);
        assert_eq!(analysis.total_duration, 0.0);
        assert_eq!(analysis.total_cost, 0.0);
    }

    #[test]
    fn zero_length_actions_get_point_slices() {
        let actions = [action(0.0, 0.0), action(0.0, 0.0)];
        let analysis = analyze(&actions, Dialect::Temporal);
        assert_eq!(analysis.time_slices.len(), 1);
        let slice = &analysis.time_slices[0];
        assert_eq!((slice.start, slice.end), (0.0, 0.0));
        assert_eq!(slice.actions, vec![0, 1]);
        assert_eq!(analysis.max_parallelism, 2);
        assert_eq!(analysis.parallel_actions, 2);
    }

    #[test]
    fn duration_lost_to_precision_still_counts() {
        // 1e23 + 1.0 rounds back to 1e23.
        let actions = [action(1e23, 1.0)];
        let analysis = analyze(&actions, Dialect::PddlPlus);
        assert_eq!(analysis.max_parallelism, 1);
        assert_eq!(analysis.time_slices[0].start, 1e23);
    }

    #[test]
    fn point_slice_inside_a_running_action() {
        // a: [0,4)  b: instant at 2
        let actions = [action(0.0, 4.0), action(2.0, 0.0)];
        let slices = time_slices(&actions, Dialect::Temporal);
        let spans: Vec<(f64, f64, Vec<usize>)> = slices
            .into_iter()
            .map(|s| (s.start, s.end, s.actions))
            .collect();
        assert_eq!(
            spans,
            vec![
                (0.0, 2.0, vec![0]),
                (2.0, 2.0, vec![0, 1]),
                (2.0, 4.0, vec![0]),
            ]
        );
    }
}
