//! Validated input for new records.
//!
//! A form holds raw text as a user typed it. Submitting a form checks that
//! every field was filled in (and, for trees, that the age is a number) before
//! appending the record to a [`RecordStore`]. A rejected form leaves the store
//! untouched.

use non_empty_string::NonEmptyString;

use crate::storage::RecordStore;

/// Reasons a form was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was left blank.
    #[error("please fill all fields ({0} is empty)")]
    EmptyField(&'static str),

    /// The tree age is not a whole number.
    #[error("age must be a number, got '{0}'")]
    InvalidAge(String),
}

fn required(field: &'static str, value: String) -> Result<String, ValidationError> {
    NonEmptyString::new(value)
        .map(|value| value.as_str().to_owned())
        .map_err(|_| ValidationError::EmptyField(field))
}

/// Raw input for a new zone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneForm {
    /// The zone identifier.
    pub id: String,
    /// The zone name.
    pub name: String,
    /// The officer responsible for the zone.
    pub officer: String,
}

impl ZoneForm {
    /// Validates the form and appends the zone to `store`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] if any field is empty.
    pub fn submit(self, store: &mut RecordStore) -> Result<(), ValidationError> {
        let id = required("zone id", self.id)?;
        let name = required("zone name", self.name)?;
        let officer = required("officer", self.officer)?;
        store.add_zone(id, name, officer);
        Ok(())
    }
}

/// Raw input for a new tree. The age is text until the form is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeForm {
    /// The tree identifier.
    pub id: String,
    /// The species name.
    pub species: String,
    /// Age in years, as typed.
    pub age: String,
}

impl TreeForm {
    /// Validates the form and appends the tree to `store`.
    ///
    /// Surrounding whitespace in the age is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] if any field is empty, or
    /// [`ValidationError::InvalidAge`] if the age is not an integer.
    pub fn submit(self, store: &mut RecordStore) -> Result<(), ValidationError> {
        let id = required("tree id", self.id)?;
        let species = required("species", self.species)?;
        let age = required("age", self.age)?;
        let age = parse_age(&age)?;
        store.add_tree(id, species, age);
        Ok(())
    }
}

/// Parses tree age text.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidAge`] if the text is not an integer.
pub fn parse_age(text: &str) -> Result<i32, ValidationError> {
    text.trim()
        .parse()
        .map_err(|_| ValidationError::InvalidAge(text.to_string()))
}

/// Raw input for a new wildlife sighting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SightingForm {
    /// The animal that was seen.
    pub animal: String,
    /// Where the animal was seen.
    pub location: String,
    /// When the animal was seen, conventionally `DD-MM-YYYY`.
    pub date: String,
}

impl SightingForm {
    /// Validates the form and appends the sighting to `store`.
    ///
    /// The date is not checked against a calendar.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] if any field is empty.
    pub fn submit(self, store: &mut RecordStore) -> Result<(), ValidationError> {
        let animal = required("animal", self.animal)?;
        let location = required("location", self.location)?;
        let date = required("date", self.date)?;
        store.add_sighting(animal, location, date);
        Ok(())
    }
}
