use forest_records::DataFile;
use tracing::instrument;

use super::terminal::{rule, Colorize};

#[derive(Debug)]
pub struct Status;

impl Status {
    #[instrument(level = "debug")]
    pub fn run(data_file: &DataFile) {
        let store = data_file.load();

        println!("{}", "Forest Records".heading());
        println!("{}", rule().dim());
        println!("  Data file:  {}", data_file.path().display());
        println!("  Zones:      {}", store.zones().len());
        println!("  Trees:      {}", store.trees().len());
        println!("  Sightings:  {}", store.sightings().len());

        if store.is_empty() {
            println!();
            println!("{}", "No records yet. Run `forest add --help` to get started.".dim());
        }
    }
}
