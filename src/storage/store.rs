//! An in-memory store of forest records
//!
//! The [`RecordStore`] knows nothing about the filesystem. It holds the three
//! record collections in insertion order; see [`DataFile`](super::DataFile)
//! for persistence.

use tracing::instrument;

use crate::domain::{Tree, WildlifeSighting, Zone};

/// An in-memory representation of every record the application tracks.
///
/// Records are only ever appended. Identifiers are not checked for
/// uniqueness, so several zones or trees may share an id.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordStore {
    zones: Vec<Zone>,
    trees: Vec<Tree>,
    sightings: Vec<WildlifeSighting>,
}

impl RecordStore {
    /// Rebuilds a store from previously decoded collections.
    #[must_use]
    pub const fn from_parts(
        zones: Vec<Zone>,
        trees: Vec<Tree>,
        sightings: Vec<WildlifeSighting>,
    ) -> Self {
        Self {
            zones,
            trees,
            sightings,
        }
    }

    /// Appends a zone.
    pub fn add_zone(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        officer: impl Into<String>,
    ) {
        self.zones.push(Zone::new(id, name, officer));
    }

    /// Appends a tree.
    ///
    /// The age must already be parsed; see
    /// [`TreeForm`](crate::forms::TreeForm) for accepting text input.
    pub fn add_tree(&mut self, id: impl Into<String>, species: impl Into<String>, age: i32) {
        self.trees.push(Tree::new(id, species, age));
    }

    /// Appends a wildlife sighting.
    pub fn add_sighting(
        &mut self,
        animal: impl Into<String>,
        location: impl Into<String>,
        date: impl Into<String>,
    ) {
        self.sightings
            .push(WildlifeSighting::new(animal, location, date));
    }

    /// All zones, in the order they were added.
    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// All trees, in the order they were added.
    #[must_use]
    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    /// All wildlife sightings, in the order they were added.
    #[must_use]
    pub fn sightings(&self) -> &[WildlifeSighting] {
        &self.sightings
    }

    /// Finds the first tree whose id exactly matches `id`.
    ///
    /// Trees are scanned in insertion order, so when ids are duplicated the
    /// earliest tree wins.
    #[must_use]
    #[instrument(level = "trace", skip(self))]
    pub fn find_tree_by_id(&self, id: &str) -> Option<&Tree> {
        self.trees.iter().find(|tree| tree.id() == id)
    }

    /// Total number of records across all three collections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len() + self.trees.len() + self.sightings.len()
    }

    /// Returns `true` if the store holds no records at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
