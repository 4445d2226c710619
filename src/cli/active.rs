use std::path::PathBuf;

use clap::Parser;
use roster::Directory;
use tracing::instrument;

use super::{table, ListFormat};

#[derive(Debug, Parser, Default)]
#[command(about = "List active employees sorted by last name")]
pub struct Active {
    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: ListFormat,
}

impl Active {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let directory = Directory::open(&root)?;
        let employees = directory.list_active_sorted_by_last_name()?;

        match self.output {
            ListFormat::Table => table::print_employees(&employees),
            ListFormat::Json => println!("{}", serde_json::to_string_pretty(&employees)?),
        }

        Ok(())
    }
}
