use crate::api::Employee;
use chrono::{DateTime, Utc};

pub const EMPLOYEES_PER_PAGE: usize = 10;
pub const EMPLOYEES_LOAD_FAILED: &str = "Failed to load employees.";
pub const EMPLOYEE_LOAD_FAILED: &str = "Failed to load employee information.";
pub const EMPLOYEE_DELETE_FAILED: &str = "An error occurred while deleting the employee.";
pub const SALARY_SAVE_FAILED: &str = "Failed to save salary information.";
pub const SALARY_SAVED: &str = "Salary information saved.";

/// Employee numbers are derived from the registration instant.
pub fn employee_number_at(at: DateTime<Utc>) -> String {
    format!("EMP-{}", at.timestamp_millis())
}

/// Case-insensitive name search, optionally narrowed to one department.
pub fn filter_employees<'a>(
    employees: &'a [Employee],
    search: &str,
    department: Option<&str>,
) -> Vec<&'a Employee> {
    let needle = search.trim().to_lowercase();
    employees
        .iter()
        .filter(|e| e.name.to_lowercase().contains(&needle))
        .filter(|e| department.map_or(true, |d| e.department == d))
        .collect()
}

pub fn total_pages(count: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    count.div_ceil(per_page)
}

/// Slice for the 1-based `page`. Out-of-range pages are empty.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    if page == 0 || start >= items.len() {
        return &[];
    }
    let end = (start + per_page).min(items.len());
    &items[start..end]
}

pub fn departments(employees: &[Employee]) -> Vec<String> {
    let mut names: Vec<String> = employees.iter().map(|e| e.department.clone()).collect();
    names.sort();
    names.dedup();
    names
}

/// Drops the deleted row from the local list.
pub fn remove_employee(employees: &mut Vec<Employee>, id: &str) {
    employees.retain(|e| e.id != id);
}
