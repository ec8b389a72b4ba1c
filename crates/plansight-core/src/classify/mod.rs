//! Action classification.
//!
//! Two layers run over every matched action:
//!
//! 1. [`dispatch`] assigns semantic roles from the action name and argument
//!    positions, and fills the action's role fields.
//! 2. [`heuristic`] files every argument under an entity category by its name
//!    alone, whatever the action is.
//!
//! Both layers register what they find in the [`EntityRegistry`].

pub mod dispatch;
pub mod heuristic;

use tracing::trace;

use crate::dialect::Dialect;
use crate::entity::EntityRegistry;
use crate::plan::{Action, ActionKind, RawAction};

pub use dispatch::{Assignment, ROBOT_ALIASES, assign_roles};
pub use heuristic::classify_token;

/// Duration given to actions no per-kind default covers.
pub const FALLBACK_DURATION: f64 = 2.0;

/// Default duration for an action of `kind` when the plan line carried none.
pub fn default_duration(kind: ActionKind) -> f64 {
    match kind {
        ActionKind::Move | ActionKind::ElevatorMove => 3.0,
        ActionKind::Pick | ActionKind::Drop => 1.5,
        ActionKind::MoveUp | ActionKind::MoveDown => 3.0,
        ActionKind::Load | ActionKind::Unload => 2.0,
        ActionKind::Board | ActionKind::Enter | ActionKind::Leave | ActionKind::Exit => 1.0,
        ActionKind::Reached => 0.5,
        ActionKind::Drive => 4.0,
        ActionKind::Fly => 6.0,
        ActionKind::Unknown => FALLBACK_DURATION,
    }
}

/// Default cost for an action of `kind` under `dialect`.
///
/// Move-class and transfer-class actions cost 1, everything else 0. `None`
/// when the dialect does not model cost.
pub fn default_cost(kind: ActionKind, dialect: Dialect) -> Option<f64> {
    if !dialect.supports_cost() {
        return None;
    }
    if kind.is_move_class() || kind.is_transfer_class() {
        Some(1.0)
    } else {
        Some(0.0)
    }
}

/// Turn a matched line into a typed action, registering its entities.
pub fn classify(raw: RawAction, dialect: Dialect, registry: &mut EntityRegistry) -> Action {
    let Assignment { kind, roles } = assign_roles(&raw.name, &raw.args);

    for (category, id) in dispatch::role_entities(&roles) {
        registry.register(category, id);
    }
    for arg in &raw.args {
        if let Some(category) = classify_token(arg) {
            registry.register(category, arg);
        }
    }

    // A malformed action keeps the defaults of the name it was written with.
    let timing_kind = match kind {
        ActionKind::Unknown => ActionKind::from_name(&raw.name),
        other => other,
    };
    let duration = raw.duration.unwrap_or_else(|| default_duration(timing_kind));

    trace!(
        name = %raw.name,
        %kind,
        syntax = ?raw.syntax,
        time = raw.time,
        duration,
        "classified action"
    );

    Action {
        time: raw.time,
        end: Some(raw.time + duration),
        duration: Some(duration),
        cost: default_cost(timing_kind, dialect),
        name: raw.name,
        args: raw.args,
        action_type: kind,
        roles,
    }
}
