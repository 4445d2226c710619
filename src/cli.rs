use std::path::PathBuf;

mod active;
mod add;
mod deactivate;
mod hired;
mod init;
mod show;
mod table;
mod terminal;

use active::Active;
use add::Add;
use clap::ArgAction;
use deactivate::Deactivate;
use hired::Hired;
use init::Init;
use show::Show;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global=true)]
    verbose: u8,

    /// The path to the root of the employee directory
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or_else(|| Command::Active(Active::default()))
            .run(self.root)
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
    /// List active employees by last name (default)
    Active(Active),

    /// Show an employee and the names of their direct reports
    Show(Show),

    /// List employees hired in a date range, most recent first
    Hired(Hired),

    /// Add a new employee
    Add(Add),

    /// Deactivate an employee
    Deactivate(Deactivate),

    /// Write a configuration file into the directory root
    Init(Init),
}

impl Command {
    fn run(self, root: PathBuf) -> anyhow::Result<()> {
        match self {
            Self::Active(command) => command.run(root)?,
            Self::Show(command) => command.run(root)?,
            Self::Hired(command) => command.run(root)?,
            Self::Add(command) => command.run(root)?,
            Self::Deactivate(command) => command.run(root)?,
            Self::Init(command) => command.run(&root)?,
        }
        Ok(())
    }
}

/// Output formats for commands that print a list of employees.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ListFormat {
    #[default]
    Table,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn defaults_to_active_listing() {
        let cli = Cli::try_parse_from(["roster"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.root, PathBuf::from("."));
    }

    #[test]
    fn parses_global_root_after_subcommand() {
        let cli = Cli::try_parse_from(["roster", "show", "3", "--root", "/tmp/staff"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("/tmp/staff"));
        assert!(matches!(cli.command, Some(Command::Show(_))));
    }

    #[test]
    fn counts_verbosity() {
        let cli = Cli::try_parse_from(["roster", "-vv", "active"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn hired_requires_both_bounds() {
        assert!(Cli::try_parse_from(["roster", "hired", "--start", "01/01/2023"]).is_err());
    }
}
