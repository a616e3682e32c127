//! The interactive console menu

use dialoguer::Input;
use forest_records::{
    DataFile, RecordStore, SightingForm, TreeForm, ValidationError, ZoneForm,
};
use tracing::instrument;

use super::{
    list::{print_records, RecordKind},
    terminal::{rule, Colorize},
};

/// An interactive session over a single record store.
///
/// The store is loaded once when the session starts and only written back
/// when the user asks to save.
pub struct Menu {
    data_file: DataFile,
    store: RecordStore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    AddZone,
    AddTree,
    AddSighting,
    ViewZones,
    ViewTrees,
    ViewSightings,
    SearchTree,
    SaveAndExit,
    Save,
}

impl Choice {
    const ALL: [(Self, &'static str); 9] = [
        (Self::AddZone, "Add Forest Zone"),
        (Self::AddTree, "Add Tree"),
        (Self::AddSighting, "Add Wildlife Sighting"),
        (Self::ViewZones, "View Zones"),
        (Self::ViewTrees, "View Trees"),
        (Self::ViewSightings, "View Wildlife Records"),
        (Self::SearchTree, "Search Tree"),
        (Self::SaveAndExit, "Save & Exit"),
        (Self::Save, "Save"),
    ];

    /// Parses a 1-based menu number.
    fn parse(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        let index = number.checked_sub(1)?;
        Self::ALL.get(index).map(|&(choice, _)| choice)
    }
}

impl Menu {
    #[instrument(level = "debug")]
    pub fn new(data_file: DataFile) -> Self {
        let store = data_file.load();
        Self { data_file, store }
    }

    pub fn run(mut self) -> anyhow::Result<()> {
        if self.store.is_empty() {
            println!("{}", "No previous data found.".dim());
        }

        loop {
            print_menu();

            let input = prompt("Enter your choice")?;
            let Some(choice) = Choice::parse(&input) else {
                println!(
                    "{}",
                    format!("Invalid choice! Enter a number from 1 to {}.", Choice::ALL.len())
                        .warning()
                );
                continue;
            };

            match choice {
                Choice::AddZone => self.add_zone()?,
                Choice::AddTree => self.add_tree()?,
                Choice::AddSighting => self.add_sighting()?,
                Choice::ViewZones => print_records(&self.store, RecordKind::Zones),
                Choice::ViewTrees => print_records(&self.store, RecordKind::Trees),
                Choice::ViewSightings => print_records(&self.store, RecordKind::Sightings),
                Choice::SearchTree => self.search_tree()?,
                Choice::Save => {
                    if let Err(e) = self.data_file.save(&self.store) {
                        println!("{}", format!("Error saving data: {e}").warning());
                    } else {
                        println!("{}", "Data saved successfully!".success());
                    }
                }
                Choice::SaveAndExit => {
                    self.data_file.save(&self.store)?;
                    println!("{}", "Data saved successfully!".success());
                    return Ok(());
                }
            }
        }
    }

    fn add_zone(&mut self) -> anyhow::Result<()> {
        let form = ZoneForm {
            id: prompt("Zone ID")?,
            name: prompt("Zone Name")?,
            officer: prompt("Officer Name")?,
        };
        report("Zone", form.submit(&mut self.store));
        Ok(())
    }

    fn add_tree(&mut self) -> anyhow::Result<()> {
        let form = TreeForm {
            id: prompt("Tree ID")?,
            species: prompt("Species")?,
            age: prompt("Age")?,
        };
        report("Tree", form.submit(&mut self.store));
        Ok(())
    }

    fn add_sighting(&mut self) -> anyhow::Result<()> {
        let form = SightingForm {
            animal: prompt("Animal")?,
            location: prompt("Location")?,
            date: prompt("Date (DD-MM-YYYY)")?,
        };
        report("Wildlife record", form.submit(&mut self.store));
        Ok(())
    }

    fn search_tree(&self) -> anyhow::Result<()> {
        let id = prompt("Enter Tree ID to Search")?;
        match self.store.find_tree_by_id(&id) {
            Some(tree) => println!("Record Found: {tree}"),
            None => println!("{}", "No Tree Found!".warning()),
        }
        Ok(())
    }
}

fn print_menu() {
    println!();
    println!("{}", "FOREST MANAGEMENT SYSTEM".heading());
    println!("{}", rule().dim());
    for (number, (_, label)) in (1..).zip(Choice::ALL) {
        println!("{number}. {label}");
    }
}

fn prompt(label: &str) -> dialoguer::Result<String> {
    Input::<String>::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
}

fn report(label: &str, result: Result<(), ValidationError>) {
    match result {
        Ok(()) => println!("{}", format!("{label} added successfully!").success()),
        Err(e) => println!("{}", format!("Not added: {e}").warning()),
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::Choice;

    #[test_case("1", Some(Choice::AddZone))]
    #[test_case(" 7 ", Some(Choice::SearchTree))]
    #[test_case("8", Some(Choice::SaveAndExit))]
    #[test_case("9", Some(Choice::Save))]
    #[test_case("0", None)]
    #[test_case("10", None)]
    #[test_case("-1", None)]
    #[test_case("two", None)]
    #[test_case("", None)]
    fn menu_choice_parsing(input: &str, expected: Option<Choice>) {
        assert_eq!(Choice::parse(input), expected);
    }
}
