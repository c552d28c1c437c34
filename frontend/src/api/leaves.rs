use reqwest::Method;

use super::{
    client::{path_segment, ApiClient},
    types::{ApiError, LeaveDecision, LeaveRequest, UpdateLeaveStatusRequest},
};

impl ApiClient {
    /// Every employee's leave requests.
    pub async fn get_leave_requests(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        self.send_json(self.request(Method::GET, "/leaves/admin/all"))
            .await
    }

    /// Records a decision. Whether the request is still pending is for the backend to judge.
    pub async fn update_leave_request_status(
        &self,
        id: &str,
        decision: LeaveDecision,
    ) -> Result<LeaveRequest, ApiError> {
        self.send_json(
            self.request(Method::PATCH, &format!("/leaves/{}/status", path_segment(id)))
                .json(&UpdateLeaveStatusRequest { status: decision }),
        )
        .await
    }
}
