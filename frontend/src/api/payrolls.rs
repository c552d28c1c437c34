use reqwest::Method;

use super::{
    attendance::period_params,
    client::{path_segment, ApiClient},
    types::{ApiError, DeletePayrollsResponse, GeneratePayrollsResponse, PayPeriod, Payroll},
};

impl ApiClient {
    pub async fn get_payrolls(&self, year: i32, month: u32) -> Result<Vec<Payroll>, ApiError> {
        self.send_json(
            self.request(Method::GET, "/payrolls")
                .query(&period_params(year, month)),
        )
        .await
    }

    pub async fn get_payroll_by_id(&self, id: &str) -> Result<Payroll, ApiError> {
        let path = format!("/payrolls/{}", path_segment(id));
        self.send_json(self.request(Method::GET, &path)).await
    }

    /// Asks the backend to derive one payroll row per eligible employee.
    ///
    /// Rows that already exist for the period surface as the backend's conflict error.
    pub async fn generate_payrolls(
        &self,
        year: i32,
        month: u32,
    ) -> Result<GeneratePayrollsResponse, ApiError> {
        self.send_json(
            self.request(Method::POST, "/payrolls/generate")
                .json(&PayPeriod { year, month }),
        )
        .await
    }

    /// Irreversibly deletes every payroll row of the period.
    pub async fn delete_payrolls_by_month(
        &self,
        year: i32,
        month: u32,
    ) -> Result<DeletePayrollsResponse, ApiError> {
        self.send_json(
            self.request(Method::DELETE, "/payrolls")
                .query(&period_params(year, month)),
        )
        .await
    }
}
