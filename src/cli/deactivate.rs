use std::{path::PathBuf, process};

use clap::Parser;
use roster::{Directory, EmployeeId};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Mark an employee as inactive")]
pub struct Deactivate {
    /// The id of the employee to deactivate
    id: EmployeeId,
}

impl Deactivate {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let directory = Directory::open(&root)?;

        // The directory treats an unknown id as a no-op, so check first.
        if !directory.contains(self.id)? {
            eprintln!("{}", format!("Employee {} not found", self.id).warning());
            process::exit(1);
        }

        directory.deactivate_employee(self.id)?;

        println!("{}", format!("Deactivated employee {}", self.id).success());
        Ok(())
    }
}
