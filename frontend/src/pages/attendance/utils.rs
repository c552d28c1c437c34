use crate::api::Attendance;

pub const ATTENDANCE_LOAD_FAILED: &str = "Failed to load attendance records.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkState {
    OnDuty,
    Completed,
}

impl WorkState {
    pub fn of(record: &Attendance) -> Self {
        if is_working(record) {
            WorkState::OnDuty
        } else {
            WorkState::Completed
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WorkState::OnDuty => "On duty",
            WorkState::Completed => "Completed",
        }
    }
}

/// Clocked in with no clock-out yet.
pub fn is_working(record: &Attendance) -> bool {
    record.clock_out_time.is_none()
}
