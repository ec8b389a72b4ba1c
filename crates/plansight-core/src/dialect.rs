//! Planning-language dialects and the capabilities each one declares.
//!
//! A dialect decides how durations, costs and parallelism of a parsed plan
//! are interpreted. The parser itself is dialect-agnostic; only action cost
//! defaults and the [`crate::temporal`] model consult it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The action-semantics profile a plan was produced under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// Sequential STRIPS plans: step indices, no durations or costs.
    #[default]
    Classical,
    /// Durative actions that may overlap in time.
    Temporal,
    /// Sequential plans with numeric fluents and action costs.
    Numerical,
    /// Hybrid discrete/continuous plans (PDDL+).
    PddlPlus,
}

/// Capability flags declared by a [`Dialect`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub supports_parallel: bool,
    pub supports_cost: bool,
    pub supports_continuous: bool,
    /// Duration given to actions that gain a duration during conversion.
    pub default_duration: f64,
}

impl Dialect {
    /// Every dialect, in declaration order.
    pub const ALL: [Dialect; 4] = [
        Self::Classical,
        Self::Temporal,
        Self::Numerical,
        Self::PddlPlus,
    ];

    pub fn capabilities(self) -> Capabilities {
        match self {
            Self::Classical => Capabilities {
                supports_parallel: false,
                supports_cost: false,
                supports_continuous: false,
                default_duration: 1.0,
            },
            Self::Temporal => Capabilities {
                supports_parallel: true,
                supports_cost: false,
                supports_continuous: false,
                default_duration: 2.0,
            },
            Self::Numerical => Capabilities {
                supports_parallel: false,
                supports_cost: true,
                supports_continuous: false,
                default_duration: 1.0,
            },
            Self::PddlPlus => Capabilities {
                supports_parallel: true,
                supports_cost: true,
                supports_continuous: true,
                default_duration: 2.0,
            },
        }
    }

    pub fn supports_parallel(self) -> bool {
        self.capabilities().supports_parallel
    }

    pub fn supports_cost(self) -> bool {
        self.capabilities().supports_cost
    }

    /// Parse a dialect tag, falling back to [`Dialect::Classical`] when the
    /// tag is absent or unrecognized.
    pub fn from_tag_lossy(tag: Option<&str>) -> Self {
        tag.and_then(|t| t.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Classical => "classical",
            Self::Temporal => "temporal",
            Self::Numerical => "numerical",
            Self::PddlPlus => "pddl_plus",
        };
        f.write_str(s)
    }
}

impl FromStr for Dialect {
    type Err = DialectParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classical" | "strips" => Ok(Self::Classical),
            "temporal" => Ok(Self::Temporal),
            "numerical" | "numeric" => Ok(Self::Numerical),
            "pddl_plus" | "pddl+" | "pddl-plus" | "hybrid" => Ok(Self::PddlPlus),
            _ => Err(DialectParseError(s.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`Dialect`] string.
#[derive(Debug, Clone)]
pub struct DialectParseError(pub String);

impl fmt::Display for DialectParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid dialect: {:?} (expected classical, temporal, numerical, or pddl_plus)",
            self.0
        )
    }
}

impl std::error::Error for DialectParseError {}
