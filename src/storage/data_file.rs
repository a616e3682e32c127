//! A single-file store of forest records
//!
//! The [`DataFile`] saves and restores the whole [`RecordStore`] as one unit.
//! Records are encoded with [borsh](https://borsh.io/) inside a versioned
//! envelope: a one-byte version tag followed by the zones, the trees and the
//! sightings, each as a length-prefixed sequence.
//!
//! Saving truncates the destination before writing. A failure partway through
//! a save can therefore leave an empty or truncated file behind, which the next
//! load treats as corrupt and replaces with an empty store.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use borsh::{BorshDeserialize, BorshSerialize};
use tracing::instrument;

use crate::{
    domain::{Tree, WildlifeSighting, Zone},
    storage::RecordStore,
};

/// A file on disk holding every record of a [`RecordStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFile {
    path: PathBuf,
}

impl DataFile {
    /// Refers to the data file at the given path. The file need not exist.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the data file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes every record in `store` to the data file, replacing its
    /// previous content.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written. The file may
    /// be left empty or partially written in that case.
    #[instrument(level = "debug", skip(store))]
    pub fn save(&self, store: &RecordStore) -> Result<(), SaveError> {
        self.write(store).map_err(|source| SaveError {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!(
            "Saved {} records to {}",
            store.len(),
            self.path.display()
        );
        Ok(())
    }

    fn write(&self, store: &RecordStore) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        borsh::to_writer(&mut writer, &VersionsRef::from(store))?;
        writer.flush()
    }

    /// Reads the records from the data file.
    ///
    /// Any failure, including a missing file, produces an empty store.
    #[must_use]
    #[instrument(level = "debug")]
    pub fn load(&self) -> RecordStore {
        self.try_load().unwrap_or_else(|e| {
            tracing::debug!("Starting with an empty store: {e}");
            RecordStore::default()
        })
    }

    /// Reads the records from the data file, reporting why that failed.
    ///
    /// # Errors
    ///
    /// - [`LoadError::Missing`] if there is no file at the path
    /// - [`LoadError::Io`] if the file exists but cannot be read
    /// - [`LoadError::Corrupt`] if the content cannot be decoded
    pub fn try_load(&self) -> Result<RecordStore, LoadError> {
        let bytes = std::fs::read(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LoadError::Missing(self.path.clone()),
            _ => LoadError::Io(e),
        })?;

        let store = decode(&bytes).map_err(LoadError::Corrupt)?;
        tracing::debug!(
            "Loaded {} records from {}",
            store.len(),
            self.path.display()
        );
        Ok(store)
    }
}

/// Encodes a store into its on-disk representation.
///
/// # Panics
///
/// Panics if borsh serialization fails, which cannot happen when writing to
/// memory.
#[must_use]
pub fn encode(store: &RecordStore) -> Vec<u8> {
    borsh::to_vec(&VersionsRef::from(store)).expect("this should never fail")
}

/// Decodes a store from its on-disk representation.
///
/// # Errors
///
/// Returns an error if the version tag is unknown, if the data ends early or
/// if bytes are left over after the last record.
pub fn decode(bytes: &[u8]) -> io::Result<RecordStore> {
    match borsh::from_slice::<Versions>(bytes)? {
        Versions::V1 {
            zones,
            trees,
            sightings,
        } => Ok(RecordStore::from_parts(zones, trees, sightings)),
    }
}

/// Errors that can occur when saving the data file.
#[derive(Debug, thiserror::Error)]
#[error("failed to save records to {}: {source}", .path.display())]
pub struct SaveError {
    path: PathBuf,
    source: io::Error,
}

impl SaveError {
    /// The path that could not be written.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Reasons the data file could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// There is no data file yet.
    #[error("no data file found at {}", .0.display())]
    Missing(PathBuf),

    /// The data file exists but could not be read.
    #[error("failed to read data file: {0}")]
    Io(#[source] io::Error),

    /// The data file was read but does not hold a valid record set.
    #[error("data file is corrupt: {0}")]
    Corrupt(#[source] io::Error),
}

/// The serialized versions of the data file.
///
/// The borsh discriminant of each variant is the version tag written at the
/// start of the file. New versions are appended, never reordered.
#[derive(Debug, BorshDeserialize)]
enum Versions {
    V1 {
        zones: Vec<Zone>,
        trees: Vec<Tree>,
        sightings: Vec<WildlifeSighting>,
    },
}

/// Borrowed mirror of [`Versions`], used when writing so the store need not be
/// cloned. Must encode identically to the owned form.
#[derive(Debug, BorshSerialize)]
enum VersionsRef<'a> {
    V1 {
        zones: &'a [Zone],
        trees: &'a [Tree],
        sightings: &'a [WildlifeSighting],
    },
}

impl<'a> From<&'a RecordStore> for VersionsRef<'a> {
    fn from(store: &'a RecordStore) -> Self {
        Self::V1 {
            zones: store.zones(),
            trees: store.trees(),
            sightings: store.sightings(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use test_case::test_case;

    use super::*;

    fn sample_store() -> RecordStore {
        let mut store = RecordStore::default();
        store.add_zone("Z1", "North", "Alice");
        store.add_zone("Z2", "South", "Bob");
        store.add_tree("T1", "Oak", 10);
        store.add_tree("T1", "Pine", 5);
        store.add_tree("T3", "Birch", -1);
        store.add_sighting("Deer", "North ridge", "01-02-2024");
        store
    }

    #[test]
    fn save_then_load_reproduces_store() {
        let tmp = tempfile::tempdir().unwrap();
        let data_file = DataFile::new(tmp.path().join("forest.dat"));
        let store = sample_store();

        data_file.save(&store).unwrap();

        assert_eq!(data_file.try_load().unwrap(), store);
    }

    #[test]
    fn empty_store_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let data_file = DataFile::new(tmp.path().join("forest.dat"));

        data_file.save(&RecordStore::default()).unwrap();

        let loaded = data_file.try_load().unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn saved_zone_survives_fresh_process() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("forest.dat");

        let mut store = RecordStore::default();
        store.add_zone("Z1", "North", "Alice");
        DataFile::new(&path).save(&store).unwrap();

        let reloaded = DataFile::new(&path).load();
        assert_eq!(reloaded.zones(), &[Zone::new("Z1", "North", "Alice")]);
        assert!(reloaded.trees().is_empty());
        assert!(reloaded.sightings().is_empty());
    }

    #[test]
    fn save_overwrites_previous_content() {
        let tmp = tempfile::tempdir().unwrap();
        let data_file = DataFile::new(tmp.path().join("forest.dat"));

        data_file.save(&sample_store()).unwrap();
        let mut smaller = RecordStore::default();
        smaller.add_tree("T9", "Ash", 2);
        data_file.save(&smaller).unwrap();

        assert_eq!(data_file.try_load().unwrap(), smaller);
    }

    #[test]
    fn missing_file_loads_empty_store() {
        let tmp = tempfile::tempdir().unwrap();
        let data_file = DataFile::new(tmp.path().join("missing.dat"));

        assert!(matches!(data_file.try_load(), Err(LoadError::Missing(_))));
        assert!(data_file.load().is_empty());
    }

    #[test_case(b"" ; "empty file")]
    #[test_case(b"not a forest file" ; "garbage")]
    #[test_case(&[7, 0, 0, 0, 0] ; "unknown version")]
    #[test_case(&[0, 1, 0, 0, 0] ; "truncated")]
    fn corrupt_file_loads_empty_store(content: &[u8]) {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("forest.dat");
        fs::write(&path, content).unwrap();
        let data_file = DataFile::new(&path);

        assert!(matches!(data_file.try_load(), Err(LoadError::Corrupt(_))));
        assert!(data_file.load().is_empty());
    }

    #[test]
    fn trailing_bytes_are_corrupt() {
        let mut bytes = encode(&sample_store());
        bytes.push(0);

        assert!(decode(&bytes).is_err());
    }

    #[test]
    fn unreadable_path_loads_empty_store() {
        // A directory exists at the path but cannot be read as a file.
        let tmp = tempfile::tempdir().unwrap();
        let data_file = DataFile::new(tmp.path());

        assert!(matches!(data_file.try_load(), Err(LoadError::Io(_))));
        assert!(data_file.load().is_empty());
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("no-such-dir").join("forest.dat");

        let error = DataFile::new(&path).save(&sample_store()).unwrap_err();
        assert_eq!(error.path(), path.as_path());
    }

    #[test]
    fn empty_store_encoding_is_version_tag_and_three_empty_lists() {
        assert_eq!(
            encode(&RecordStore::default()),
            [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn field_layout_is_stable() {
        let mut store = RecordStore::default();
        store.add_tree("T", "Y", 258);

        #[rustfmt::skip]
        let expected = [
            0,          // version tag
            0, 0, 0, 0, // no zones
            1, 0, 0, 0, // one tree
            1, 0, 0, 0, b'T',
            1, 0, 0, 0, b'Y',
            2, 1, 0, 0, // age
            0, 0, 0, 0, // no sightings
        ];
        assert_eq!(encode(&store), expected);
    }
}
