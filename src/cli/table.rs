//! Tabular rendering of employee lists

use roster::Employee;

use super::terminal::{is_narrow, Colorize};

/// Print employees as an aligned table.
///
/// On narrow terminals only the id and name columns are shown.
pub fn print_employees(employees: &[Employee]) {
    if employees.is_empty() {
        println!("{}", "No matching employees.".dim());
        return;
    }

    let rows = render(employees, is_narrow());
    let mut lines = rows.lines();
    if let Some(header) = lines.next() {
        println!("{}", header.dim());
    }
    for line in lines {
        println!("{line}");
    }
}

fn render(employees: &[Employee], narrow: bool) -> String {
    let id_width = employees
        .iter()
        .map(|e| e.id.to_string().len())
        .max()
        .unwrap_or(0)
        .max("ID".len());
    let name_width = employees
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    let mut out = String::new();

    if narrow {
        out.push_str(&format!("{:<id_width$}  NAME\n", "ID"));
        for e in employees {
            out.push_str(&format!("{:<id_width$}  {}\n", e.id, e.name));
        }
        return out;
    }

    let position_width = employees
        .iter()
        .map(|e| e.position.chars().count())
        .max()
        .unwrap_or(0)
        .max("POSITION".len());

    out.push_str(&format!(
        "{:<id_width$}  {:<name_width$}  {:<position_width$}  {:<10}  ACTIVE\n",
        "ID", "NAME", "POSITION", "HIRED"
    ));
    for e in employees {
        out.push_str(&format!(
            "{:<id_width$}  {:<name_width$}  {:<position_width$}  {:<10}  {}\n",
            e.id,
            e.name,
            e.position,
            e.hire_date.to_string(),
            if e.active { "yes" } else { "no" }
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use roster::HireDate;

    use super::*;

    fn roster() -> Vec<Employee> {
        vec![
            Employee::new(1, "John Smith", HireDate::from_ymd(2021, 8, 30).unwrap())
                .with_position("Manager"),
            Employee::new(12, "Jane Doe", HireDate::from_ymd(2023, 1, 15).unwrap())
                .with_active(false),
        ]
    }

    #[test]
    fn wide_table_has_all_columns() {
        let out = render(&roster(), false);
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID  NAME        POSITION  HIRED"));
        assert!(lines[1].starts_with("1   John Smith  Manager   08/30/2021  yes"));
        assert!(lines[2].starts_with("12  Jane Doe              01/15/2023  no"));
    }

    #[test]
    fn narrow_table_shows_id_and_name() {
        let out = render(&roster(), true);
        assert_eq!(out, "ID  NAME\n1   John Smith\n12  Jane Doe\n");
    }
}
