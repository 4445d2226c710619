use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use roster::Directory;
use tracing::instrument;

use super::{table, ListFormat};

#[derive(Debug, Parser)]
#[command(about = "List employees hired in a date range, most recent first")]
pub struct Hired {
    /// First day of the range, inclusive (MM/DD/YYYY)
    #[arg(long, value_name = "DATE")]
    start: String,

    /// Last day of the range, inclusive (MM/DD/YYYY)
    #[arg(long, value_name = "DATE")]
    end: String,

    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: ListFormat,
}

impl Hired {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let directory = Directory::open(&root)?;
        let employees = directory
            .list_hired_in_range(&self.start, &self.end)
            .with_context(|| format!("cannot list hires from {} to {}", self.start, self.end))?;

        match self.output {
            ListFormat::Table => table::print_employees(&employees),
            ListFormat::Json => println!("{}", serde_json::to_string_pretty(&employees)?),
        }

        Ok(())
    }
}
