/// Persistence of the record store to a single data file.
pub mod data_file;
mod store;

pub use data_file::{DataFile, LoadError, SaveError};
pub use store::RecordStore;
