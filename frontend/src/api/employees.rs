use reqwest::Method;

use super::{
    client::{path_segment, ApiClient},
    types::{
        ApiError, CreateEmployeeRequest, Employee, Salary, UpdateEmployeeRequest,
        UpsertSalaryRequest,
    },
};

impl ApiClient {
    pub async fn get_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.send_json(self.request(Method::GET, "/employees")).await
    }

    pub async fn get_employee_by_id(&self, id: &str) -> Result<Employee, ApiError> {
        let path = format!("/employees/{}", path_segment(id));
        self.send_json(self.request(Method::GET, &path)).await
    }

    pub async fn create_employee(
        &self,
        request: &CreateEmployeeRequest,
    ) -> Result<Employee, ApiError> {
        self.send_json(self.request(Method::POST, "/employees").json(request))
            .await
    }

    pub async fn update_employee(
        &self,
        id: &str,
        request: &UpdateEmployeeRequest,
    ) -> Result<Employee, ApiError> {
        self.send_json(
            self.request(Method::PATCH, &format!("/employees/{}", path_segment(id)))
                .json(request),
        )
        .await
    }

    pub async fn delete_employee(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/employees/{}", path_segment(id));
        self.send_empty(self.request(Method::DELETE, &path)).await
    }

    /// Creates or replaces the salary record of `employee_id`.
    pub async fn upsert_salary(
        &self,
        employee_id: &str,
        request: &UpsertSalaryRequest,
    ) -> Result<Salary, ApiError> {
        self.send_json(
            self.request(
                Method::POST,
                &format!("/payrolls/salaries/{}", path_segment(employee_id)),
            )
            .json(request),
        )
        .await
    }
}
