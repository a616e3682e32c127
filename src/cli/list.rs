use std::fmt::Display;

use forest_records::{DataFile, RecordStore};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, clap::Parser)]
pub struct List {
    /// Which records to list
    #[arg(value_enum, default_value = "all")]
    kind: RecordKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum RecordKind {
    Zones,
    Trees,
    Sightings,
    #[default]
    All,
}

impl List {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, data_file: &DataFile) {
        let store = data_file.load();
        print_records(&store, self.kind);
    }
}

/// Prints the requested collections in insertion order.
pub fn print_records(store: &RecordStore, kind: RecordKind) {
    match kind {
        RecordKind::Zones => print_section("Forest Zones", store.zones()),
        RecordKind::Trees => print_section("Trees", store.trees()),
        RecordKind::Sightings => print_section("Wildlife Sightings", store.sightings()),
        RecordKind::All => {
            print_section("Forest Zones", store.zones());
            print_section("Trees", store.trees());
            print_section("Wildlife Sightings", store.sightings());
        }
    }
}

fn print_section<T: Display>(title: &str, records: &[T]) {
    println!();
    println!("{}", format!("--- {title} ---").heading());
    if records.is_empty() {
        println!("{}", "(none)".dim());
    }
    for record in records {
        println!("{record}");
    }
}
