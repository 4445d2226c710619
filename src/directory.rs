//! Query and mutation rules over the employee roster
//!
//! The [`Directory`] is the only place business rules live. It is agnostic
//! to how the roster is stored: every operation loads the whole roster from
//! an [`EmployeeStore`], computes its result, and (for mutations) saves the
//! whole roster back.
//!
//! Mutations are serialised through a single writer lock held across the
//! load-modify-save sequence, so two mutations issued through the same
//! directory cannot overwrite each other's changes. Queries do not take the
//! lock.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Mutex, PoisonError},
};

use crate::{
    domain::{Config, ConfigError, Employee, EmployeeId, EmployeeWithReports, HireDate, HireDateError},
    storage::{EmployeeStore, JsonStore, LoadError, OpenError, SaveError},
};

/// Query and mutation operations over a stored roster.
#[derive(Debug)]
pub struct Directory<S = JsonStore> {
    store: S,
    writer: Mutex<()>,
}

impl Directory<JsonStore> {
    /// Open the directory rooted at `root`.
    ///
    /// The configuration is read from `roster.toml` in the root, if present,
    /// and the JSON store is opened according to it.
    ///
    /// # Errors
    ///
    /// This method can fail if:
    ///
    /// - the configuration file exists but cannot be read or parsed
    /// - the store cannot be opened
    pub fn open(root: &Path) -> Result<Self, OpenDirectoryError> {
        let config = Config::load_or_default(root)?;
        let store = JsonStore::open(config.store_options(root))?;
        tracing::debug!("Opened directory at {}", store.path().display());
        Ok(Self::new(store))
    }
}

impl<S: EmployeeStore> Directory<S> {
    /// Create a directory over the given store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self {
            store,
            writer: Mutex::new(()),
        }
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// All active employees, sorted by last name.
    ///
    /// Last names are compared case-insensitively, by lowercasing each
    /// character on its own (no locale or context rules). Ordering is by
    /// Unicode scalar value after that, not by collation. The sort is stable,
    /// so employees sharing a last name keep their storage order.
    ///
    /// # Errors
    ///
    /// This method can fail if:
    ///
    /// - the roster cannot be loaded
    /// - an active employee's name has no second token to sort by (see
    ///   [`Employee::last_name`])
    pub fn list_active_sorted_by_last_name(&self) -> Result<Vec<Employee>, ListActiveError> {
        let mut keyed = Vec::new();

        for employee in self.store.load_all()?.into_iter().filter(|e| e.active) {
            let key = employee
                .last_name()
                .map(|last| last.chars().flat_map(char::to_lowercase).collect::<String>());
            let Some(key) = key else {
                return Err(ListActiveError::NoLastName {
                    id: employee.id,
                    name: employee.name,
                });
            };
            keyed.push((key, employee));
        }

        keyed.sort_by(|(a, _), (b, _)| a.cmp(b));

        Ok(keyed.into_iter().map(|(_, employee)| employee).collect())
    }

    /// Find an employee by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster cannot be loaded.
    pub fn get_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, LoadError> {
        Ok(self.store.load_all()?.into_iter().find(|e| e.id == id))
    }

    /// Whether an employee with the given id exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster cannot be loaded.
    pub fn contains(&self, id: EmployeeId) -> Result<bool, LoadError> {
        Ok(self.store.load_all()?.iter().any(|e| e.id == id))
    }

    /// All employees hired between `start` and `end` inclusive, most recent
    /// first.
    ///
    /// Both bounds are `MM/DD/YYYY` dates. Employees hired on the same day
    /// keep their storage order. If `start` is after `end` the result is
    /// empty.
    ///
    /// # Errors
    ///
    /// This method can fail if:
    ///
    /// - either bound is not a valid `MM/DD/YYYY` date
    /// - the roster cannot be loaded
    pub fn list_hired_in_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Vec<Employee>, HiredInRangeError> {
        let start: HireDate = start.parse()?;
        let end: HireDate = end.parse()?;

        let mut hired: Vec<_> = self
            .store
            .load_all()?
            .into_iter()
            .filter(|e| start <= e.hire_date && e.hire_date <= end)
            .collect();

        hired.sort_by(|a, b| b.hire_date.cmp(&a.hire_date));

        Ok(hired)
    }

    /// Find an employee by id, along with the names of its direct reports.
    ///
    /// Report names are joined with `", "` in the order the ids appear in
    /// [`Employee::direct_reports`]. Ids that do not match any employee are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster cannot be loaded.
    pub fn get_with_direct_reports(
        &self,
        id: EmployeeId,
    ) -> Result<Option<EmployeeWithReports>, LoadError> {
        let employees = self.store.load_all()?;

        let mut by_id: HashMap<EmployeeId, &Employee> = HashMap::with_capacity(employees.len());
        for employee in &employees {
            by_id.entry(employee.id).or_insert(employee);
        }

        let Some(employee) = by_id.get(&id) else {
            return Ok(None);
        };

        let direct_report_names = employee
            .direct_reports
            .iter()
            .filter_map(|report| by_id.get(report))
            .map(|report| report.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        Ok(Some(EmployeeWithReports {
            employee: (*employee).clone(),
            direct_report_names,
        }))
    }

    /// Add a new employee to the roster.
    ///
    /// # Errors
    ///
    /// This method can fail if:
    ///
    /// - an employee with the same id already exists (the roster is left
    ///   unchanged)
    /// - the roster cannot be loaded or saved, including when the new
    ///   employee fails validation
    pub fn add_employee(&self, employee: Employee) -> Result<(), AddEmployeeError> {
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);

        let mut employees = self.store.load_all()?;

        if employees.iter().any(|e| e.id == employee.id) {
            return Err(AddEmployeeError::DuplicateId(employee.id));
        }

        let id = employee.id;
        employees.push(employee);
        self.store.save_all(&employees)?;

        tracing::info!("Added employee: {id}");

        Ok(())
    }

    /// Mark every employee with the given id as inactive.
    ///
    /// The roster is always saved, even if no employee matched; deactivating
    /// an unknown id is not an error. Use [`Directory::contains`] first if
    /// absence matters to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster cannot be loaded or saved.
    pub fn deactivate_employee(&self, id: EmployeeId) -> Result<(), DeactivateError> {
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);

        let mut employees = self.store.load_all()?;

        let mut matched = 0usize;
        for employee in employees.iter_mut().filter(|e| e.id == id) {
            employee.active = false;
            matched += 1;
        }

        self.store.save_all(&employees)?;

        if matched == 0 {
            tracing::warn!("Deactivate matched no employee with id {id}");
        } else {
            tracing::info!("Deactivated employee: {id}");
        }

        Ok(())
    }
}

/// Failure to open a [`Directory`] from its root.
#[derive(Debug, thiserror::Error)]
pub enum OpenDirectoryError {
    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The store could not be opened.
    #[error(transparent)]
    Store(#[from] OpenError),
}

/// Failure to list active employees.
#[derive(Debug, thiserror::Error)]
pub enum ListActiveError {
    /// The roster could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// An active employee's name cannot be split into first and last name.
    #[error("cannot determine last name of employee {id} ('{name}'): expected \"First Last\"")]
    NoLastName {
        /// The id of the offending employee.
        id: EmployeeId,
        /// The offending name.
        name: String,
    },
}

/// Failure to list employees hired in a date range.
#[derive(Debug, thiserror::Error)]
pub enum HiredInRangeError {
    /// A bound of the range is not a valid date.
    #[error(transparent)]
    InvalidDate(#[from] HireDateError),

    /// The roster could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Failure to add an employee.
#[derive(Debug, thiserror::Error)]
pub enum AddEmployeeError {
    /// An employee with this id already exists.
    #[error("employee with id {0} already exists")]
    DuplicateId(EmployeeId),

    /// The roster could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The roster could not be saved.
    #[error(transparent)]
    Save(#[from] SaveError),
}

/// Failure to deactivate an employee.
#[derive(Debug, thiserror::Error)]
pub enum DeactivateError {
    /// The roster could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The roster could not be saved.
    #[error(transparent)]
    Save(#[from] SaveError),
}
