//! Plan text parser: the entry point tying normalization, matching,
//! classification and statistics together.
//!
//! [`parse_plan`] never fails outright. Every problem ends up in
//! [`PlanParseResult::error`] alongside whatever data could be recovered:
//! - definition files (domain/problem) yield empty actions and entities;
//! - lines matching no action syntax are skipped;
//! - an internal fault yields a fully empty result.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::classify;
use crate::dialect::Dialect;
use crate::domain::{Domain, detect_domain};
use crate::entity::{Entities, EntityRegistry};
use crate::temporal::{self, PlanAnalysis};

use super::action::Action;
use super::matcher::match_line;
use super::metrics::Metrics;
use super::normalize::{DefinitionKind, detect_definition, normalize};

/// Errors that stop a parse before any action is produced.
#[derive(Debug, Error)]
pub enum PlanParseError {
    #[error("input is a planning {kind} definition, not a plan")]
    NotAPlanFile { kind: DefinitionKind },

    #[error("internal parser fault: {0}")]
    InternalFault(String),
}

/// Caller-supplied parse settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Dialect the plan was produced under.
    pub dialect: Dialect,
    /// Known domain; `None` runs domain detection.
    pub domain: Option<Domain>,
}

impl ParseOptions {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            domain: None,
        }
    }

    /// Build options from a dialect tag, falling back to classical for
    /// absent or unknown tags.
    pub fn from_tag(tag: Option<&str>) -> Self {
        Self::new(Dialect::from_tag_lossy(tag))
    }

    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = Some(domain);
        self
    }
}

/// Everything recovered from one plan text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanParseResult {
    /// Actions in input order.
    pub actions: Vec<Action>,
    pub entities: Entities,
    pub metrics: Metrics,
    pub domain: Domain,
    pub pddl_type: Dialect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PlanParseResult {
    fn failed(options: &ParseOptions, err: &PlanParseError) -> Self {
        Self {
            actions: Vec::new(),
            entities: Entities::default(),
            metrics: Metrics::default(),
            domain: options.domain.unwrap_or_default(),
            pddl_type: options.dialect,
            error: Some(err.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Timing, cost and parallelism figures under this result's dialect.
    pub fn analysis(&self) -> PlanAnalysis {
        temporal::analyze(&self.actions, self.pddl_type)
    }
}

/// Parse planner output into actions, entities, metrics and a domain.
pub fn parse_plan(content: &str, options: &ParseOptions) -> PlanParseResult {
    match panic::catch_unwind(AssertUnwindSafe(|| try_parse_plan(content, options))) {
        Ok(Ok(result)) => result,
        Ok(Err(err)) => {
            warn!(error = %err, "plan rejected");
            PlanParseResult::failed(options, &err)
        }
        Err(payload) => {
            let err = PlanParseError::InternalFault(panic_message(payload.as_ref()));
            warn!(error = %err, "plan parser fault");
            PlanParseResult::failed(options, &err)
        }
    }
}

/// Text of a caught panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_owned())
}

/// Parse without the fault barrier; definition files are an `Err`.
pub fn try_parse_plan(
    content: &str,
    options: &ParseOptions,
) -> Result<PlanParseResult, PlanParseError> {
    if let Some(kind) = detect_definition(content) {
        return Err(PlanParseError::NotAPlanFile { kind });
    }

    let lines = normalize(content);
    let mut registry = EntityRegistry::new();
    let mut actions: Vec<Action> = Vec::with_capacity(lines.candidates.len());

    for line in &lines.candidates {
        match match_line(line, actions.len()) {
            Some(raw) => actions.push(classify::classify(raw, options.dialect, &mut registry)),
            None => debug!(line, "skipped unparsable line"),
        }
    }

    let metrics = Metrics::extract(lines.rejected.iter().copied());
    let entities = registry.into_entities();
    let domain = match options.domain {
        Some(domain) => domain,
        None => {
            let detected = detect_domain(&actions, &entities);
            debug!(%detected, "detected plan domain");
            detected
        }
    };

    debug!(
        actions = actions.len(),
        skipped = lines.candidates.len() - actions.len(),
        %domain,
        dialect = %options.dialect,
        "parsed plan"
    );

    Ok(PlanParseResult {
        actions,
        entities,
        metrics,
        domain,
        pddl_type: options.dialect,
        error: None,
    })
}
