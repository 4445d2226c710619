// EmployeeWithReports - an employee decorated with its resolved hierarchy.

use serde::Serialize;

use crate::domain::Employee;

/// An employee together with the names of its direct reports.
///
/// This is a read-only view produced by the hierarchy lookup. It is never
/// written to the backing store; only the wrapped [`Employee`] is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeWithReports {
    /// The employee that was looked up.
    #[serde(flatten)]
    pub employee: Employee,

    /// Names of the resolved direct reports, joined with `", "`.
    ///
    /// Names appear in the order the ids are listed in
    /// [`Employee::direct_reports`]. Ids that do not resolve to an employee
    /// are skipped.
    pub direct_report_names: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HireDate;

    #[test]
    fn serializes_flat_with_report_names() {
        let employee = Employee::new(1, "John Smith", HireDate::from_ymd(2021, 8, 30).unwrap())
            .with_direct_reports(vec![2]);
        let view = EmployeeWithReports {
            employee,
            direct_report_names: "Jane Doe".to_string(),
        };

        let value = serde_json::to_value(&view).unwrap();

        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "John Smith");
        assert_eq!(value["directReportNames"], "Jane Doe");
    }
}
