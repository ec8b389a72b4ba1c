//! Entity registry: distinct identifiers per category, in first-seen order.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// The fixed set of entity categories a plan argument can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityCategory {
    Robots,
    Rooms,
    Floors,
    Objects,
    Packages,
    Passengers,
    Elevators,
    Vehicles,
    Locations,
}

impl EntityCategory {
    /// Every category, in display order.
    pub const ALL: [EntityCategory; 9] = [
        Self::Robots,
        Self::Rooms,
        Self::Floors,
        Self::Objects,
        Self::Packages,
        Self::Passengers,
        Self::Elevators,
        Self::Vehicles,
        Self::Locations,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Robots => "robots",
            Self::Rooms => "rooms",
            Self::Floors => "floors",
            Self::Objects => "objects",
            Self::Packages => "packages",
            Self::Passengers => "passengers",
            Self::Elevators => "elevators",
            Self::Vehicles => "vehicles",
            Self::Locations => "locations",
        };
        f.write_str(s)
    }
}

impl FromStr for EntityCategory {
    type Err = EntityCategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.to_string() == s)
            .ok_or_else(|| EntityCategoryParseError(s.to_owned()))
    }
}

/// Error returned when parsing an invalid [`EntityCategory`] string.
#[derive(Debug, Clone)]
pub struct EntityCategoryParseError(pub String);

impl fmt::Display for EntityCategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid entity category: {:?}", self.0)
    }
}

impl std::error::Error for EntityCategoryParseError {}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Accumulates identifiers per category during a single parse.
///
/// Registration is idempotent and keeps the first-seen position. There is no
/// removal; the registry is consumed by [`EntityRegistry::into_entities`].
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    sets: [IndexSet<String>; 9],
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `identifier` to `category` if it is not already present.
    ///
    /// Returns `true` when the identifier was newly inserted.
    pub fn register(&mut self, category: EntityCategory, identifier: &str) -> bool {
        let set = &mut self.sets[category.index()];
        // Identifiers repeat on most action lines; skip the allocation for those.
        if set.contains(identifier) {
            return false;
        }
        set.insert(identifier.to_owned())
    }

    pub fn contains(&self, category: EntityCategory, identifier: &str) -> bool {
        self.sets[category.index()].contains(identifier)
    }

    pub fn len(&self, category: EntityCategory) -> usize {
        self.sets[category.index()].len()
    }

    /// Convert into plain ordered lists, one per category.
    pub fn into_entities(self) -> Entities {
        let [
            robots,
            rooms,
            floors,
            objects,
            packages,
            passengers,
            elevators,
            vehicles,
            locations,
        ] = self.sets.map(|set| set.into_iter().collect::<Vec<_>>());
        Entities {
            robots,
            rooms,
            floors,
            objects,
            packages,
            passengers,
            elevators,
            vehicles,
            locations,
        }
    }
}

// ---------------------------------------------------------------------------
// Ordered output
// ---------------------------------------------------------------------------

/// Final entity listing returned to callers: one ordered, duplicate-free
/// list per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entities {
    pub robots: Vec<String>,
    pub rooms: Vec<String>,
    pub floors: Vec<String>,
    pub objects: Vec<String>,
    pub packages: Vec<String>,
    pub passengers: Vec<String>,
    pub elevators: Vec<String>,
    pub vehicles: Vec<String>,
    pub locations: Vec<String>,
}

impl Entities {
    pub fn get(&self, category: EntityCategory) -> &[String] {
        match category {
            EntityCategory::Robots => &self.robots,
            EntityCategory::Rooms => &self.rooms,
            EntityCategory::Floors => &self.floors,
            EntityCategory::Objects => &self.objects,
            EntityCategory::Packages => &self.packages,
            EntityCategory::Passengers => &self.passengers,
            EntityCategory::Elevators => &self.elevators,
            EntityCategory::Vehicles => &self.vehicles,
            EntityCategory::Locations => &self.locations,
        }
    }

    pub fn is_empty(&self) -> bool {
        EntityCategory::ALL.iter().all(|c| self.get(*c).is_empty())
    }

    /// Iterate categories in display order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (EntityCategory, &[String])> {
        EntityCategory::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}
