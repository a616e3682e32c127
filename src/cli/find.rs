use forest_records::DataFile;
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, clap::Parser)]
pub struct FindTree {
    /// The exact ID of the tree (case-sensitive)
    id: String,
}

impl FindTree {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, data_file: &DataFile) {
        let store = data_file.load();

        let Some(tree) = store.find_tree_by_id(&self.id) else {
            eprintln!("{}", format!("No tree found with ID {}", self.id).warning());
            std::process::exit(1);
        };

        println!("Record Found: {tree}");
    }
}
