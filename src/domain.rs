//! Domain models for forest record keeping.
//!
//! This module contains the three record kinds tracked by the application
//! and the application configuration. The records are independent of each
//! other; nothing in a tree refers to a zone, and so on.

mod config;
pub use config::{Config, ConfigError, DEFAULT_DATA_FILE};

/// Forest management zones.
pub mod zone;
pub use zone::Zone;

/// Individually tracked trees.
pub mod tree;
pub use tree::Tree;

/// Logged wildlife observations.
pub mod sighting;
pub use sighting::WildlifeSighting;
