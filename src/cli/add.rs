use std::path::PathBuf;

use clap::Parser;
use roster::{Directory, Employee, EmployeeId, HireDate};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Add a new employee to the roster")]
pub struct Add {
    /// Unique, positive employee id
    #[arg(long)]
    id: EmployeeId,

    /// Full name ("First Last")
    #[arg(long)]
    name: String,

    /// Job title
    #[arg(long, default_value = "")]
    position: String,

    /// Date of hire (MM/DD/YYYY)
    #[arg(long, value_name = "DATE")]
    hire_date: HireDate,

    /// Add the employee as inactive
    #[arg(long)]
    inactive: bool,

    /// Ids of direct reports (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "ID")]
    reports: Vec<EmployeeId>,
}

impl Add {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let directory = Directory::open(&root)?;

        let employee = Employee::new(self.id, self.name, self.hire_date)
            .with_position(self.position)
            .with_active(!self.inactive)
            .with_direct_reports(self.reports);

        directory.add_employee(employee)?;

        println!("{}", format!("Added employee {}", self.id).success());
        Ok(())
    }
}
