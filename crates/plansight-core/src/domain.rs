//! Best-effort classification of the planning domain a plan belongs to.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entity::Entities;
use crate::plan::Action;

/// The domain family a plan animates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Robot,
    Elevator,
    Logistics,
    #[default]
    Unknown,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Robot => "robot",
            Self::Elevator => "elevator",
            Self::Logistics => "logistics",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

impl FromStr for Domain {
    type Err = DomainParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "robot" => Ok(Self::Robot),
            "elevator" => Ok(Self::Elevator),
            "logistics" => Ok(Self::Logistics),
            "unknown" => Ok(Self::Unknown),
            _ => Err(DomainParseError(s.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`Domain`] string.
#[derive(Debug, Clone)]
pub struct DomainParseError(pub String);

impl fmt::Display for DomainParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid domain: {:?} (expected robot, elevator, logistics, or unknown)",
            self.0
        )
    }
}

impl std::error::Error for DomainParseError {}

/// Guess the domain from action names and entity populations.
///
/// First match wins, in this order:
/// - `move-up`/`move-down` actions or any elevator: [`Domain::Elevator`]
/// - `drive`/`fly` actions or any vehicle: [`Domain::Logistics`]
/// - `pick`/`drop` actions or any robot: [`Domain::Robot`]
///
/// Mixed plans are resolved by this order alone.
pub fn detect_domain(actions: &[Action], entities: &Entities) -> Domain {
    let names: HashSet<String> = actions.iter().map(|a| a.name.to_lowercase()).collect();
    let has = |candidates: &[&str]| candidates.iter().any(|n| names.contains(*n));

    if has(&["move-up", "move-down"]) || !entities.elevators.is_empty() {
        Domain::Elevator
    } else if has(&["drive", "fly"]) || !entities.vehicles.is_empty() {
        Domain::Logistics
    } else if has(&["pick", "drop"]) || !entities.robots.is_empty() {
        Domain::Robot
    } else {
        Domain::Unknown
    }
}
