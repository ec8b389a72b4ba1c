//! The typed action record produced for each matched plan line.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical action kinds recognized by the role dispatch table.
///
/// Synonyms collapse onto one variant (`pickup`, `pick-up` -> [`Pick`]).
/// [`Unknown`] covers unrecognized names as well as recognized names whose
/// argument list was too short to assign roles.
///
/// [`Pick`]: ActionKind::Pick
/// [`Unknown`]: ActionKind::Unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Move,
    /// A `move` whose first argument is an elevator.
    ElevatorMove,
    Pick,
    Drop,
    MoveUp,
    MoveDown,
    Load,
    Unload,
    Board,
    Enter,
    Leave,
    Exit,
    Reached,
    Drive,
    Fly,
    Unknown,
}

impl ActionKind {
    /// Map a lowercase action name onto its canonical kind.
    pub fn from_name(name: &str) -> Self {
        match name {
            "move" => Self::Move,
            "pick" | "pickup" | "pick-up" => Self::Pick,
            "drop" | "putdown" | "put-down" => Self::Drop,
            "move-up" => Self::MoveUp,
            "move-down" => Self::MoveDown,
            "load" => Self::Load,
            "unload" => Self::Unload,
            "board" => Self::Board,
            "enter" => Self::Enter,
            "leave" => Self::Leave,
            "exit" => Self::Exit,
            "reached" => Self::Reached,
            "drive" => Self::Drive,
            "fly" => Self::Fly,
            _ => Self::Unknown,
        }
    }

    /// Movement of an agent or carrier between places.
    pub fn is_move_class(self) -> bool {
        matches!(
            self,
            Self::Move | Self::ElevatorMove | Self::MoveUp | Self::MoveDown | Self::Drive | Self::Fly
        )
    }

    /// Transfer of an item or person into or out of something.
    pub fn is_transfer_class(self) -> bool {
        matches!(
            self,
            Self::Pick
                | Self::Drop
                | Self::Load
                | Self::Unload
                | Self::Board
                | Self::Enter
                | Self::Leave
                | Self::Exit
        )
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Move => "move",
            Self::ElevatorMove => "elevator_move",
            Self::Pick => "pick",
            Self::Drop => "drop",
            Self::MoveUp => "move_up",
            Self::MoveDown => "move_down",
            Self::Load => "load",
            Self::Unload => "unload",
            Self::Board => "board",
            Self::Enter => "enter",
            Self::Leave => "leave",
            Self::Exit => "exit",
            Self::Reached => "reached",
            Self::Drive => "drive",
            Self::Fly => "fly",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Semantic roles assigned to positional arguments.
///
/// Roles are derived from `args` and never authoritative over them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_room: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_room: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passenger: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
}

/// A single plan step.
///
/// `duration` and `end` are always present on freshly parsed actions; they
/// (and `cost`) are only absent after a lossy dialect conversion or when the
/// active dialect does not model cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    /// Start time: seconds for temporal plans, step index otherwise.
    pub time: f64,
    /// Lowercase action name as written in the plan.
    pub name: String,
    /// Positional parameters in original order.
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    pub action_type: ActionKind,
    #[serde(flatten)]
    pub roles: Roles,
}

impl Action {
    /// End of the action's interval, falling back to `time + duration`
    /// and finally to `time + fallback_duration`.
    pub fn effective_end(&self, fallback_duration: f64) -> f64 {
        self.end
            .unwrap_or_else(|| self.time + self.duration.unwrap_or(fallback_duration))
    }
}
