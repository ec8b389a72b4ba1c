//! Name-based entity classification, independent of the action name.

use std::sync::LazyLock;

use regex::Regex;

use crate::entity::EntityCategory;

static FLOOR_INDEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"f\d+").expect("floor index regex"));

/// Substring markers per category. Earlier entries take precedence.
const MARKERS: &[(EntityCategory, &[&str])] = &[
    (EntityCategory::Robots, &["robot", "wally", "eve"]),
    (EntityCategory::Elevators, &["elevator", "lift"]),
    (EntityCategory::Passengers, &["person", "passenger"]),
    (EntityCategory::Floors, &["floor"]),
    (EntityCategory::Rooms, &["room"]),
    (EntityCategory::Objects, &["ball", "box", "item"]),
    (EntityCategory::Packages, &["package", "cargo"]),
    (EntityCategory::Vehicles, &["truck", "plane", "ship", "vehicle"]),
    (EntityCategory::Locations, &["city", "location", "warehouse", "airport"]),
];

/// Classify one argument by its name alone.
///
/// Returns the first category whose marker occurs in the lowercased token.
/// Floors also match an `f<digits>` pattern.
pub fn classify_token(token: &str) -> Option<EntityCategory> {
    let lower = token.to_lowercase();
    MARKERS
        .iter()
        .find(|(category, markers)| {
            markers.iter().any(|m| lower.contains(m))
                || (*category == EntityCategory::Floors && FLOOR_INDEX.is_match(&lower))
        })
        .map(|(category, _)| *category)
}
