use std::path::PathBuf;

mod add;
mod find;
mod list;
mod menu;
mod status;
mod terminal;

use add::Add;
use clap::ArgAction;
use find::FindTree;
use forest_records::{Config, DataFile};
use list::List;
use menu::Menu;
use status::Status;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The data file to load and save records.
    ///
    /// Overrides the `data_file` setting in the configuration file.
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// The path to the configuration file
    #[arg(short, long, default_value = "forest.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let data_file = self.data.map_or_else(
            || DataFile::new(Config::load_or_default(&self.config).data_file()),
            DataFile::new,
        );

        self.command
            .unwrap_or(Command::Menu)
            .run(&data_file)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Run the interactive menu (default)
    Menu,

    /// Add a record and save
    #[command(subcommand)]
    Add(Add),

    /// List stored records
    List(List),

    /// Look up a tree by its ID
    ///
    /// When several trees share an ID, the one added first is shown.
    FindTree(FindTree),

    /// Show how many records are stored
    Status,
}

impl Command {
    fn run(self, data_file: &DataFile) -> anyhow::Result<()> {
        match self {
            Self::Menu => Menu::new(data_file.clone()).run()?,
            Self::Add(command) => command.run(data_file)?,
            Self::List(command) => command.run(data_file),
            Self::FindTree(command) => command.run(data_file),
            Self::Status => Status::run(data_file),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["forest"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from("forest.toml"));
        assert!(cli.data.is_none());
    }

    #[test]
    fn global_options_follow_subcommand() {
        let cli = Cli::try_parse_from(["forest", "status", "--data", "x.dat", "-vv"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Status)));
        assert_eq!(cli.data, Some(PathBuf::from("x.dat")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn add_tree_keeps_age_as_text() {
        let cli = Cli::try_parse_from(["forest", "add", "tree", "T1", "Oak", "abc"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Add(_))));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
