use std::fmt;

use borsh::{BorshDeserialize, BorshSerialize};

/// A logged observation of an animal at a location on a date.
///
/// Sightings have no identity of their own. The date is conventionally
/// `DD-MM-YYYY` but is kept as opaque text.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct WildlifeSighting {
    animal: String,
    location: String,
    date: String,
}

impl WildlifeSighting {
    /// Creates a new sighting record.
    #[must_use]
    pub fn new(
        animal: impl Into<String>,
        location: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            animal: animal.into(),
            location: location.into(),
            date: date.into(),
        }
    }

    /// The animal that was seen.
    #[must_use]
    pub fn animal(&self) -> &str {
        &self.animal
    }

    /// Where the animal was seen.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// The date of the sighting, exactly as it was entered.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }
}

impl fmt::Display for WildlifeSighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Animal: {}, Location: {}, Date: {}",
            self.animal, self.location, self.date
        )
    }
}
