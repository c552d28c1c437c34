use crate::api::{ApiClient, LeaveDecision, LeaveRequest};
use crate::state::LoadState;
use std::rc::Rc;

use super::utils::{LEAVES_LOAD_FAILED, STATUS_CHANGE_FAILED};

#[derive(Clone)]
pub struct LeavesRepository {
    client: Rc<ApiClient>,
}

impl LeavesRepository {
    pub fn new(api: ApiClient) -> Self {
        Self::new_with_client(Rc::new(api))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> LoadState<Vec<LeaveRequest>> {
        let result = self.client.get_leave_requests().await;
        LoadState::from_result(result, |_| LEAVES_LOAD_FAILED.to_string())
    }

    /// Approves or rejects a request. The backend decides whether the transition is allowed.
    pub async fn decide(
        &self,
        id: &str,
        decision: LeaveDecision,
    ) -> Result<LeaveRequest, String> {
        self.client
            .update_leave_request_status(id, decision)
            .await
            .map_err(|err| {
                log::error!("Leave decision on {} failed: {}", id, err);
                STATUS_CHANGE_FAILED.to_string()
            })
    }
}
