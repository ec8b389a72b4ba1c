//! Plan text handling: normalization, line matching, statistics and the
//! parse entry point.

pub mod action;
pub mod matcher;
pub mod metrics;
pub mod normalize;
pub mod parser;

pub use action::{Action, ActionKind, Roles};
pub use matcher::{LineSyntax, RawAction, match_line};
pub use metrics::Metrics;
pub use normalize::{DefinitionKind, NormalizedLines, detect_definition, normalize};
pub use parser::{ParseOptions, PlanParseError, PlanParseResult, parse_plan, try_parse_plan};
