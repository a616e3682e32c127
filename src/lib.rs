//! Forest record keeping
//!
//! Tracks forest zones, individual trees and wildlife sightings. Records are
//! held in an in-memory [`RecordStore`] and persisted as a single binary
//! [`DataFile`].

pub mod domain;
pub use domain::{Config, Tree, WildlifeSighting, Zone};

pub mod forms;
pub use forms::{SightingForm, TreeForm, ValidationError, ZoneForm};

/// In-memory storage of records and their persistence to disk.
pub mod storage;
pub use storage::{DataFile, LoadError, RecordStore, SaveError};
