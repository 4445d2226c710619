use serde::{Deserialize, Serialize};

use crate::domain::HireDate;

/// The identifier of an employee.
///
/// Identifiers are plain integers so that invalid values (zero or negative)
/// can be represented and rejected at save time.
pub type EmployeeId = i64;

/// An employee on the roster.
///
/// This is the persisted form of an employee: every field here is written to
/// the backing store. Derived, view-specific data (such as the names of an
/// employee's direct reports) lives on [`EmployeeWithReports`] instead.
///
/// [`EmployeeWithReports`]: crate::domain::EmployeeWithReports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Primary key. Must be positive and unique within the roster.
    pub id: EmployeeId,

    /// Full name, conventionally "First Last".
    ///
    /// See [`Employee::last_name`] for how the last name is derived.
    pub name: String,

    /// Free-text job title.
    #[serde(default)]
    pub position: String,

    /// When the employee was hired.
    pub hire_date: HireDate,

    /// Whether the employee is currently active.
    #[serde(default = "default_active")]
    pub active: bool,

    /// Identifiers of the employee's direct reports, in display order.
    ///
    /// These are non-owning references; an identifier need not exist in
    /// the roster.
    #[serde(default)]
    pub direct_reports: Vec<EmployeeId>,
}

const fn default_active() -> bool {
    true
}

impl Employee {
    /// Construct a new, active employee with no position and no direct
    /// reports.
    #[must_use]
    pub fn new(id: EmployeeId, name: impl Into<String>, hire_date: HireDate) -> Self {
        Self {
            id,
            name: name.into(),
            position: String::new(),
            hire_date,
            active: default_active(),
            direct_reports: Vec::new(),
        }
    }

    /// Set the employee's position.
    #[must_use]
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    /// Set the employee's direct reports.
    #[must_use]
    pub fn with_direct_reports(mut self, direct_reports: Vec<EmployeeId>) -> Self {
        self.direct_reports = direct_reports;
        self
    }

    /// Set whether the employee is active.
    #[must_use]
    pub const fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// The employee's last name.
    ///
    /// Names are assumed to have exactly two space-separated tokens
    /// ("First Last"); the last name is the second token. Names with more
    /// tokens yield the second token (so "Mary Ann Smith" yields "Ann").
    ///
    /// Returns `None` if the name has no non-empty second token.
    #[must_use]
    pub fn last_name(&self) -> Option<&str> {
        self.name.split(' ').nth(1).filter(|token| !token.is_empty())
    }

    /// Check the invariants an employee must satisfy before it is persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is not positive, or if the name is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id <= 0 {
            return Err(ValidationError::NonPositiveId {
                id: self.id,
                name: self.name.clone(),
            });
        }
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName { id: self.id });
        }
        Ok(())
    }
}

/// An employee record that may not be persisted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The id is zero or negative.
    #[error("employee '{name}' has invalid id {id}: ids must be positive")]
    NonPositiveId {
        /// The offending id.
        id: EmployeeId,
        /// The name of the offending employee.
        name: String,
    },

    /// The name is empty.
    #[error("employee {id} has an empty name")]
    EmptyName {
        /// The id of the offending employee.
        id: EmployeeId,
    },
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn hired() -> HireDate {
        HireDate::from_ymd(2020, 1, 1).unwrap()
    }

    #[test_case("John Smith", Some("Smith"); "first and last")]
    #[test_case("Mary Ann Smith", Some("Ann"); "middle name yields second token")]
    #[test_case("Cher", None; "single token")]
    #[test_case("Prince ", None; "trailing space")]
    #[test_case("", None; "empty")]
    fn last_name_is_second_token(name: &str, expected: Option<&str>) {
        let employee = Employee::new(1, name, hired());
        assert_eq!(employee.last_name(), expected);
    }

    #[test]
    fn valid_employee_passes_validation() {
        let employee = Employee::new(7, "Jane Doe", hired());
        assert_eq!(employee.validate(), Ok(()));
    }

    #[test_case(0; "zero")]
    #[test_case(-3; "negative")]
    fn non_positive_id_fails_validation(id: EmployeeId) {
        let employee = Employee::new(id, "Jane Doe", hired());
        assert_eq!(
            employee.validate(),
            Err(ValidationError::NonPositiveId {
                id,
                name: "Jane Doe".to_string()
            })
        );
    }

    #[test]
    fn empty_name_fails_validation() {
        let employee = Employee::new(4, "", hired());
        assert_eq!(
            employee.validate(),
            Err(ValidationError::EmptyName { id: 4 })
        );
    }

    #[test]
    fn deserializes_with_defaults() {
        let json = r#"{"id": 3, "name": "Ann Roe", "hireDate": "09/01/2024"}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();

        assert_eq!(employee.id, 3);
        assert!(employee.active);
        assert!(employee.position.is_empty());
        assert!(employee.direct_reports.is_empty());
    }

    #[test]
    fn serializes_camel_case_fields() {
        let employee = Employee::new(1, "John Smith", hired())
            .with_position("Engineer")
            .with_direct_reports(vec![2, 3]);

        let value = serde_json::to_value(&employee).unwrap();

        assert_eq!(value["hireDate"], "01/01/2020");
        assert_eq!(value["directReports"], serde_json::json!([2, 3]));
        assert_eq!(value["active"], true);
        assert!(value.get("directReportNames").is_none());
    }
}
