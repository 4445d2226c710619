// Roster validation applied before every save.

use std::fmt;

use nonempty::NonEmpty;

use crate::domain::{Employee, ValidationError};

/// Check every employee in a roster against the persistence invariants.
///
/// This does *not* fail fast: all offending records are reported.
///
/// # Errors
///
/// Returns an error listing each employee with a non-positive id or an
/// empty name.
pub fn validate_all(employees: &[Employee]) -> Result<(), InvalidEmployees> {
    let failures: Vec<_> = employees
        .iter()
        .filter_map(|employee| employee.validate().err())
        .collect();

    NonEmpty::from_vec(failures).map_or(Ok(()), |failures| Err(InvalidEmployees { failures }))
}

/// One or more employees in a roster failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct InvalidEmployees {
    failures: NonEmpty<ValidationError>,
}

impl InvalidEmployees {
    /// The individual validation failures, in roster order.
    #[must_use]
    pub const fn failures(&self) -> &NonEmpty<ValidationError> {
        &self.failures
    }
}

impl fmt::Display for InvalidEmployees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MAX_DISPLAY: usize = 5;

        write!(f, "invalid employee data: ")?;

        let total = self.failures.len();

        let displayed: Vec<String> = self
            .failures
            .iter()
            .take(MAX_DISPLAY)
            .map(ToString::to_string)
            .collect();

        let msg = displayed.join("; ");

        if total <= MAX_DISPLAY {
            write!(f, "{msg}")
        } else {
            write!(f, "{msg}... (and {} more)", total - MAX_DISPLAY)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HireDate;

    fn employee(id: i64, name: &str) -> Employee {
        Employee::new(id, name, HireDate::from_ymd(2022, 3, 1).unwrap())
    }

    #[test]
    fn valid_roster_passes() {
        let roster = vec![employee(1, "John Smith"), employee(2, "Jane Doe")];
        assert!(validate_all(&roster).is_ok());
    }

    #[test]
    fn empty_roster_passes() {
        assert!(validate_all(&[]).is_ok());
    }

    #[test]
    fn reports_every_offending_employee() {
        let roster = vec![
            employee(0, "Nobody Special"),
            employee(2, "Jane Doe"),
            employee(3, ""),
        ];

        let error = validate_all(&roster).unwrap_err();

        assert_eq!(error.failures().len(), 2);
        assert_eq!(
            error.failures().first(),
            &ValidationError::NonPositiveId {
                id: 0,
                name: "Nobody Special".to_string()
            }
        );
        assert_eq!(error.failures().last(), &ValidationError::EmptyName { id: 3 });
    }

    #[test]
    fn display_truncates_long_failure_lists() {
        let roster: Vec<_> = (1..=7).map(|id| employee(id, "")).collect();

        let message = validate_all(&roster).unwrap_err().to_string();

        assert!(message.starts_with("invalid employee data: employee 1 has an empty name"));
        assert!(message.ends_with("(and 2 more)"));
    }
}
