//! File-backed Employee Directory
//!
//! The roster is a JSON document on disk. A [`Directory`] answers queries
//! over it (active employees, hire-date ranges, direct reports) and applies
//! the two supported mutations (adding and deactivating employees).

pub mod domain;
pub use domain::{Config, Employee, EmployeeId, EmployeeWithReports, HireDate};

/// Durable storage of the employee roster.
pub mod storage;
pub use storage::{EmployeeStore, JsonStore, StoreOptions};

pub mod directory;
pub use directory::Directory;
