use std::fmt;

use borsh::{BorshDeserialize, BorshSerialize};

/// A tracked individual tree.
///
/// Ages are expected to be non-negative but are stored as given.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Tree {
    id: String,
    species: String,
    age: i32,
}

impl Tree {
    /// Creates a new tree record.
    #[must_use]
    pub fn new(id: impl Into<String>, species: impl Into<String>, age: i32) -> Self {
        Self {
            id: id.into(),
            species: species.into(),
            age,
        }
    }

    /// The tree identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The species name.
    #[must_use]
    pub fn species(&self) -> &str {
        &self.species
    }

    /// Age in years.
    #[must_use]
    pub const fn age(&self) -> i32 {
        self.age
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tree ID: {}, Species: {}, Age: {} years",
            self.id, self.species, self.age
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Tree;

    #[test]
    fn display_includes_age_in_years() {
        let tree = Tree::new("T1", "Oak", 10);
        assert_eq!(tree.to_string(), "Tree ID: T1, Species: Oak, Age: 10 years");
    }
}
