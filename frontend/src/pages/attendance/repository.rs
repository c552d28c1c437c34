use crate::api::{ApiClient, Attendance};
use crate::state::LoadState;
use std::rc::Rc;

use super::utils::ATTENDANCE_LOAD_FAILED;

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl AttendanceRepository {
    pub fn new(api: ApiClient) -> Self {
        Self::new_with_client(Rc::new(api))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Every employee's records for one month.
    pub async fn list(&self, year: i32, month: u32) -> LoadState<Vec<Attendance>> {
        let result = self.client.get_attendances(year, month).await;
        LoadState::from_result(result, |_| ATTENDANCE_LOAD_FAILED.to_string())
    }
}
