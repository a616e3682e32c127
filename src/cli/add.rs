use forest_records::{DataFile, RecordStore, SightingForm, TreeForm, ValidationError, ZoneForm};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, clap::Subcommand)]
pub enum Add {
    /// Add a forest zone
    Zone {
        /// Zone ID
        id: String,
        /// Zone name
        name: String,
        /// Officer in charge of the zone
        officer: String,
    },

    /// Add a tree
    Tree {
        /// Tree ID
        id: String,
        /// Species
        species: String,
        /// Age in years
        #[arg(allow_hyphen_values = true)]
        age: String,
    },

    /// Add a wildlife sighting
    Sighting {
        /// The animal seen
        animal: String,
        /// Where it was seen
        location: String,
        /// When it was seen (DD-MM-YYYY)
        date: String,
    },
}

impl Add {
    /// Validates the record, appends it to the stored records and saves.
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, data_file: &DataFile) -> anyhow::Result<()> {
        let mut store = data_file.load();
        let label = self.apply(&mut store)?;
        data_file.save(&store)?;

        println!("{}", format!("{label} added successfully!").success());
        Ok(())
    }

    fn apply(self, store: &mut RecordStore) -> Result<&'static str, ValidationError> {
        match self {
            Self::Zone { id, name, officer } => {
                ZoneForm { id, name, officer }.submit(store)?;
                Ok("Zone")
            }
            Self::Tree { id, species, age } => {
                TreeForm { id, species, age }.submit(store)?;
                Ok("Tree")
            }
            Self::Sighting {
                animal,
                location,
                date,
            } => {
                SightingForm {
                    animal,
                    location,
                    date,
                }
                .submit(store)?;
                Ok("Wildlife record")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use forest_records::{DataFile, Tree};

    use super::Add;

    #[test]
    fn add_persists_record() {
        let tmp = tempfile::tempdir().unwrap();
        let data_file = DataFile::new(tmp.path().join("forest.dat"));

        Add::Tree {
            id: "T1".to_string(),
            species: "Oak".to_string(),
            age: "10".to_string(),
        }
        .run(&data_file)
        .unwrap();

        assert_eq!(data_file.load().trees(), &[Tree::new("T1", "Oak", 10)]);
    }

    #[test]
    fn invalid_age_is_not_saved() {
        let tmp = tempfile::tempdir().unwrap();
        let data_file = DataFile::new(tmp.path().join("forest.dat"));

        let result = Add::Tree {
            id: "T1".to_string(),
            species: "Oak".to_string(),
            age: "abc".to_string(),
        }
        .run(&data_file);

        assert!(result.is_err());
        assert!(!data_file.path().exists());
    }
}
