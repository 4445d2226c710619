use std::{path::PathBuf, process};

use clap::Parser;
use roster::{Directory, EmployeeId, EmployeeWithReports};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Display an employee and the names of their direct reports")]
pub struct Show {
    /// The id of the employee to display
    id: EmployeeId,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl Show {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let directory = Directory::open(&root)?;

        let Some(view) = directory.get_with_direct_reports(self.id)? else {
            eprintln!("Employee {} not found", self.id);
            process::exit(1);
        };

        match self.output {
            OutputFormat::Pretty => Self::output_pretty(&view),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        }

        Ok(())
    }

    fn output_pretty(view: &EmployeeWithReports) {
        let employee = &view.employee;

        println!("# {} {}", employee.id, employee.name);
        if !employee.position.is_empty() {
            println!("{}", employee.position);
        }
        println!();

        println!("{}", "Details".dim());
        println!("  Hired:     {}", employee.hire_date);
        let status = if employee.active {
            "active".success()
        } else {
            "inactive".warning()
        };
        println!("  Status:    {status}");

        if !employee.direct_reports.is_empty() {
            println!("\n{}", "Direct reports".dim());
            if view.direct_report_names.is_empty() {
                println!("  (none of the listed ids are on the roster)");
            } else {
                println!("  {}", view.direct_report_names);
            }
        }
    }
}
