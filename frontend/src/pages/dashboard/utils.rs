use crate::api::Employee;

pub const DASHBOARD_LOAD_FAILED: &str = "Failed to load dashboard data.";
pub const RECENT_HIRES_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub headcount: usize,
    pub recent_hires: Vec<Employee>,
}

impl DashboardSummary {
    pub fn from_employees(employees: &[Employee]) -> Self {
        Self {
            headcount: headcount(employees),
            recent_hires: recent_hires(employees, RECENT_HIRES_LIMIT),
        }
    }
}

pub fn headcount(employees: &[Employee]) -> usize {
    employees.len()
}

/// Newest `join_date` first. Ties keep their list order.
pub fn recent_hires(employees: &[Employee], limit: usize) -> Vec<Employee> {
    let mut sorted = employees.to_vec();
    sorted.sort_by(|a, b| b.join_date.cmp(&a.join_date));
    sorted.truncate(limit);
    sorted
}
