use crate::api::{ApiClient, Employee};
use crate::state::LoadState;
use std::rc::Rc;

use super::utils::{DashboardSummary, DASHBOARD_LOAD_FAILED};

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new(api: ApiClient) -> Self {
        Self::new_with_client(Rc::new(api))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn load(&self) -> LoadState<DashboardSummary> {
        let result = self.client.get_employees().await;
        LoadState::from_result(result, |err| err.message_or(DASHBOARD_LOAD_FAILED))
            .map(|employees: Vec<Employee>| DashboardSummary::from_employees(&employees))
    }
}
