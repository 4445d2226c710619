use crate::domain::Employee;

/// A JSON file backed store of employees.
pub mod json_store;
mod validation;

pub use json_store::{JsonStore, LoadError, OpenError, SaveError, StoreOptions};
pub use validation::{validate_all, InvalidEmployees};

/// Durable storage for the whole employee roster.
///
/// A store loads and saves the roster as a single unit; there is no way to
/// update part of it. Implementations must reject an invalid roster (see
/// [`validate_all`]) without persisting any of it.
pub trait EmployeeStore {
    /// Read the entire persisted roster, in storage order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be read or its content
    /// is malformed.
    fn load_all(&self) -> Result<Vec<Employee>, LoadError>;

    /// Replace the entire persisted roster with `employees`.
    ///
    /// # Errors
    ///
    /// Returns an error if any employee is invalid, in which case nothing is
    /// written, or if the backing medium cannot be written.
    fn save_all(&self, employees: &[Employee]) -> Result<(), SaveError>;
}
