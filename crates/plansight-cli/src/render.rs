//! Human-readable renderings of parse results and plan analyses.

use std::fmt::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use plansight_core::{Metrics, PlanAnalysis, PlanParseResult};

/// Serialize any result type as JSON.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("failed to serialize output as JSON")
}

/// Summary of a parse: header, action table, entities and metrics.
pub fn summary(result: &PlanParseResult) -> String {
    let mut out = String::new();

    if let Some(error) = &result.error {
        let _ = writeln!(out, "Error: {error}");
        return out;
    }

    let _ = writeln!(out, "Domain:   {}", result.domain);
    let _ = writeln!(out, "Dialect:  {}", result.pddl_type);
    let _ = writeln!(out, "Actions:  {}", result.actions.len());
    out.push('\n');

    let _ = writeln!(
        out,
        "{:>9} {:>8}  {:<16} {}",
        "TIME", "DUR", "ACTION", "ARGS"
    );
    let _ = writeln!(out, "{}", "-".repeat(60));
    for action in &result.actions {
        let duration = action
            .duration
            .map(|d| format!("{d:.3}"))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:>9.3} {:>8}  {:<16} {}",
            action.time,
            duration,
            action.name,
            action.args.join(" ")
        );
    }

    if !result.entities.is_empty() {
        out.push('\n');
        out.push_str("Entities:\n");
        for (category, ids) in result.entities.iter().filter(|(_, ids)| !ids.is_empty()) {
            let label = format!("{category}:");
            let _ = writeln!(out, "  {label:<12} {}", ids.join(", "));
        }
    }

    if !result.metrics.is_empty() {
        out.push('\n');
        out.push_str("Metrics:\n");
        for (label, value) in metric_rows(&result.metrics) {
            let _ = writeln!(out, "  {label:<18} {value}");
        }
    }

    out
}

fn metric_rows(metrics: &Metrics) -> Vec<(&'static str, String)> {
    let counts = [
        ("plan length:", metrics.plan_length, ""),
        ("planning time:", metrics.planning_time, " ms"),
        ("search time:", metrics.search_time, " ms"),
        ("expanded nodes:", metrics.expanded_nodes, ""),
        ("states evaluated:", metrics.states_evaluated, ""),
    ];
    let mut rows: Vec<(&'static str, String)> = counts
        .into_iter()
        .filter_map(|(label, value, unit)| value.map(|v| (label, format!("{v}{unit}"))))
        .collect();
    if let Some(cost) = metrics.total_cost {
        rows.push(("total cost:", cost.to_string()));
    }
    rows
}

/// Timing, cost and parallelism report.
pub fn analysis(analysis: &PlanAnalysis) -> String {
    let mut out = String::new();
    let caps = analysis.dialect.capabilities();

    let _ = writeln!(out, "Dialect:          {}", analysis.dialect);
    let _ = writeln!(out, "Total duration:   {:.3}", analysis.total_duration);
    if caps.supports_cost {
        let _ = writeln!(out, "Total cost:       {:.2}", analysis.total_cost);
    } else {
        let _ = writeln!(out, "Total cost:       - (not modeled)");
    }
    let _ = writeln!(out, "Max parallelism:  {}", analysis.max_parallelism);
    let _ = writeln!(out, "Parallel actions: {}", analysis.parallel_actions);

    if !analysis.time_slices.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "{:>9} {:>9} {:>4}  {}", "START", "END", "N", "ACTIONS");
        let _ = writeln!(out, "{}", "-".repeat(44));
        for slice in &analysis.time_slices {
            let indices: Vec<String> = slice.actions.iter().map(|i| format!("#{i}")).collect();
            let _ = writeln!(
                out,
                "{:>9.3} {:>9.3} {:>4}  {}",
                slice.start,
                slice.end,
                slice.parallelism,
                indices.join(" ")
            );
        }
    }

    out
}
