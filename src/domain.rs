//! Domain models for the employee directory.
//!
//! This module contains the core domain types: employees, hire dates, the
//! hierarchy view returned by direct-report lookups, and configuration.

/// Employee records and their validation rules.
pub mod employee;
pub use employee::{Employee, EmployeeId, ValidationError};

/// Hire dates in `MM/DD/YYYY` format.
pub mod hire_date;
pub use hire_date::{HireDate, HireDateError};

mod employee_view;
pub use employee_view::EmployeeWithReports;

mod config;
pub use config::{Config, ConfigError, CONFIG_FILE_NAME};
