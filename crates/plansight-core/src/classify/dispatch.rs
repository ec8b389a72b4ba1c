//! Per-action-name role assignment.
//!
//! Each [`ActionKind`] owns a fixed mapping from argument positions to
//! semantic roles. A mapping applies all-or-nothing: an argument list shorter
//! than the mapping needs degrades the action to [`ActionKind::Unknown`].

use crate::entity::EntityCategory;
use crate::plan::{ActionKind, Roles};

/// Names that always denote a robot, even without "robot" in them.
pub const ROBOT_ALIASES: &[&str] = &["wally", "eve"];

/// Outcome of the dispatch layer for one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub kind: ActionKind,
    pub roles: Roles,
}

/// Assign roles to `args` according to the action's name.
pub fn assign_roles(name: &str, args: &[String]) -> Assignment {
    let kind = ActionKind::from_name(name);
    match try_assign(kind, args) {
        Some(assignment) => assignment,
        None => Assignment {
            kind: ActionKind::Unknown,
            roles: fallback_robot(args),
        },
    }
}

fn try_assign(kind: ActionKind, args: &[String]) -> Option<Assignment> {
    let arg = |i: usize| args.get(i).cloned();
    let mut roles = Roles::default();

    let kind = match kind {
        ActionKind::Move | ActionKind::ElevatorMove => {
            let first = args.first()?;
            if first.to_lowercase().contains("elevator") {
                roles.elevator = Some(first.clone());
                ActionKind::ElevatorMove
            } else {
                require(args, 3)?;
                roles.robot = arg(0);
                roles.from_room = arg(1);
                roles.to_room = arg(2);
                ActionKind::Move
            }
        }
        ActionKind::Pick | ActionKind::Drop => {
            require(args, 3)?;
            roles.object = arg(0);
            roles.room = arg(1);
            roles.robot = arg(2);
            kind
        }
        ActionKind::MoveUp | ActionKind::MoveDown => {
            require(args, 1)?;
            roles.elevator = arg(0);
            kind
        }
        ActionKind::Load | ActionKind::Unload => {
            let first = args.first()?;
            if first.to_lowercase().contains("person") {
                require(args, 2)?;
                roles.passenger = arg(0);
                roles.elevator = arg(1);
            } else {
                require(args, 3)?;
                roles.package = arg(0);
                roles.vehicle = arg(1);
                roles.location = arg(2);
            }
            kind
        }
        ActionKind::Board | ActionKind::Enter | ActionKind::Leave | ActionKind::Exit => {
            require(args, 3)?;
            roles.passenger = arg(0);
            roles.elevator = arg(1);
            roles.floor = arg(2);
            kind
        }
        ActionKind::Reached => {
            require(args, 1)?;
            roles.passenger = arg(0);
            kind
        }
        ActionKind::Drive | ActionKind::Fly => {
            require(args, 3)?;
            roles.vehicle = arg(0);
            roles.from_location = arg(1);
            roles.to_location = arg(2);
            kind
        }
        ActionKind::Unknown => return None,
    };

    Some(Assignment { kind, roles })
}

fn require(args: &[String], len: usize) -> Option<()> {
    (args.len() >= len).then_some(())
}

/// For unclassified actions, pick the first argument that looks like a robot.
fn fallback_robot(args: &[String]) -> Roles {
    let robot = args.iter().find(|a| {
        let lower = a.to_lowercase();
        lower.contains("robot") || ROBOT_ALIASES.contains(&lower.as_str())
    });
    Roles {
        robot: robot.cloned(),
        ..Roles::default()
    }
}

/// The entity category each populated role feeds into, in a fixed order.
pub fn role_entities(roles: &Roles) -> Vec<(EntityCategory, &str)> {
    let pairs = [
        (EntityCategory::Robots, &roles.robot),
        (EntityCategory::Objects, &roles.object),
        (EntityCategory::Rooms, &roles.room),
        (EntityCategory::Rooms, &roles.from_room),
        (EntityCategory::Rooms, &roles.to_room),
        (EntityCategory::Elevators, &roles.elevator),
        (EntityCategory::Passengers, &roles.passenger),
        (EntityCategory::Floors, &roles.floor),
        (EntityCategory::Vehicles, &roles.vehicle),
        (EntityCategory::Packages, &roles.package),
        (EntityCategory::Locations, &roles.location),
        (EntityCategory::Locations, &roles.from_location),
        (EntityCategory::Locations, &roles.to_location),
    ];
    pairs
        .into_iter()
        .filter_map(|(category, value)| value.as_deref().map(|v| (category, v)))
        .collect()
}
