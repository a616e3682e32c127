use std::fmt;

use borsh::{BorshDeserialize, BorshSerialize};

/// A named forest management area with an assigned officer.
///
/// The `id` is free text and is not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Zone {
    id: String,
    name: String,
    officer: String,
}

impl Zone {
    /// Creates a new zone record.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, officer: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            officer: officer.into(),
        }
    }

    /// The zone identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The zone name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The officer responsible for the zone.
    #[must_use]
    pub fn officer(&self) -> &str {
        &self.officer
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zone ID: {}, Name: {}, Officer: {}",
            self.id, self.name, self.officer
        )
    }
}
