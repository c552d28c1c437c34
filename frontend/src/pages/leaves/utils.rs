use crate::api::{LeaveRequest, LeaveStatus, LeaveType};

pub const LEAVES_LOAD_FAILED: &str = "Failed to load leave requests.";
pub const STATUS_CHANGE_FAILED: &str = "Failed to change the status.";

/// `None` keeps every request.
pub fn filter_by_status(
    requests: &[LeaveRequest],
    status: Option<LeaveStatus>,
) -> Vec<&LeaveRequest> {
    requests
        .iter()
        .filter(|r| status.map_or(true, |s| r.status == s))
        .collect()
}

/// Swaps in the server's copy of a request, matched by id.
pub fn replace_request(requests: &mut [LeaveRequest], updated: LeaveRequest) {
    if let Some(slot) = requests.iter_mut().find(|r| r.id == updated.id) {
        *slot = updated;
    }
}

/// Only pending requests offer approve and reject actions.
pub fn can_decide(request: &LeaveRequest) -> bool {
    !request.status.is_terminal()
}

pub fn pending_count(requests: &[LeaveRequest]) -> usize {
    requests
        .iter()
        .filter(|r| r.status == LeaveStatus::Pending)
        .count()
}

pub fn status_label(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Pending => "Pending",
        LeaveStatus::Approved => "Approved",
        LeaveStatus::Rejected => "Rejected",
    }
}

pub fn leave_type_label(kind: LeaveType) -> &'static str {
    match kind {
        LeaveType::AnnualLeave => "Annual leave",
        LeaveType::SickLeave => "Sick leave",
        LeaveType::BereavementLeave => "Bereavement leave",
        LeaveType::Other => "Other",
    }
}
