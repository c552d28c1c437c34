use crate::api::{ApiClient, Payroll};
use crate::state::{failure_message, LoadState};
use std::rc::Rc;

use super::utils::{
    deletion_notice, generation_notice, PAYROLLS_LOAD_FAILED, PAYROLL_DELETE_FAILED,
    PAYROLL_GENERATE_FAILED, PAYROLL_LOAD_FAILED,
};

#[derive(Clone)]
pub struct PayrollsRepository {
    client: Rc<ApiClient>,
}

impl PayrollsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self::new_with_client(Rc::new(api))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, year: i32, month: u32) -> LoadState<Vec<Payroll>> {
        let result = self.client.get_payrolls(year, month).await;
        LoadState::from_result(result, |err| err.message_or(PAYROLLS_LOAD_FAILED))
    }

    pub async fn get(&self, id: &str) -> LoadState<Payroll> {
        let result = self.client.get_payroll_by_id(id).await;
        LoadState::from_result(result, |_| PAYROLL_LOAD_FAILED.to_string())
    }

    /// Generates the month's statements and returns the notice to show.
    ///
    /// On failure the backend's message is preferred over the fallback.
    pub async fn generate(&self, year: i32, month: u32) -> Result<String, String> {
        self.client
            .generate_payrolls(year, month)
            .await
            .map(|res| generation_notice(res.count))
            .map_err(|err| failure_message(&err, PAYROLL_GENERATE_FAILED))
    }

    pub async fn delete_month(&self, year: i32, month: u32) -> Result<String, String> {
        self.client
            .delete_payrolls_by_month(year, month)
            .await
            .map(|res| deletion_notice(res.deleted_count))
            .map_err(|err| failure_message(&err, PAYROLL_DELETE_FAILED))
    }
}
