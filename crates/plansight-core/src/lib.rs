//! Parsing and interpretation of automated-planner output.
//!
//! Turns the loosely structured text planners print (timestamped action
//! lines interleaved with search statistics) into typed [`Action`]s, an
//! inferred entity listing, planner [`Metrics`] and a best-effort [`Domain`].
//! The [`temporal`] module derives makespan, cost and parallelism for a
//! chosen [`Dialect`].

pub mod classify;
pub mod dialect;
pub mod domain;
pub mod entity;
pub mod plan;
pub mod temporal;

pub use dialect::{Capabilities, Dialect};
pub use domain::{Domain, detect_domain};
pub use entity::{Entities, EntityCategory, EntityRegistry};
pub use plan::{
    Action, ActionKind, Metrics, ParseOptions, PlanParseError, PlanParseResult, Roles, parse_plan,
};
pub use temporal::{PlanAnalysis, TimeSlice, analyze, convert_action, convert_actions};
