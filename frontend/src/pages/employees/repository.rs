use crate::api::{
    ApiClient, CreateEmployeeRequest, CreateUserRequest, Employee, EmploymentStatus,
    EmploymentType, UpdateEmployeeRequest, UpsertSalaryRequest, GENERIC_ERROR_MESSAGE,
};
use crate::state::{failure_message, LoadState};
use chrono::{DateTime, NaiveDate, Utc};
use std::rc::Rc;

use super::utils::{
    employee_number_at, EMPLOYEES_LOAD_FAILED, EMPLOYEE_DELETE_FAILED, EMPLOYEE_LOAD_FAILED,
    SALARY_SAVED, SALARY_SAVE_FAILED,
};

// Personal details are not collected by the registration form yet.
const PLACEHOLDER_RESIDENT_NUMBER: &str = "000000-0000000";
const PLACEHOLDER_PHONE_NUMBER: &str = "010-0000-0000";
const PLACEHOLDER_BANK_NAME: &str = "Test Bank";
const PLACEHOLDER_BANK_ACCOUNT: &str = "123-456-7890";

/// Fields entered on the new-employee form.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployeeForm {
    pub email: String,
    pub password: String,
    pub name: String,
    pub department: String,
    pub position: String,
    pub join_date: String,
    pub base_salary: Option<f64>,
    pub effective_date: Option<NaiveDate>,
}

impl NewEmployeeForm {
    fn into_request(self, user_id: String, registered_at: DateTime<Utc>) -> CreateEmployeeRequest {
        let (base_salary, effective_date) = match (self.base_salary, self.effective_date) {
            (Some(amount), Some(date)) => (Some(amount), Some(date)),
            _ => (None, None),
        };
        CreateEmployeeRequest {
            user_id,
            employee_number: employee_number_at(registered_at),
            name: self.name,
            join_date: self.join_date,
            resident_registration_number: PLACEHOLDER_RESIDENT_NUMBER.into(),
            phone_number: PLACEHOLDER_PHONE_NUMBER.into(),
            department: self.department,
            position: self.position,
            employment_type: EmploymentType::FullTime,
            bank_name: PLACEHOLDER_BANK_NAME.into(),
            bank_account_number: PLACEHOLDER_BANK_ACCOUNT.into(),
            resignation_date: None,
            status: EmploymentStatus::Employed,
            base_salary,
            effective_date,
        }
    }
}

/// Fields editable on the employee edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeEdit {
    pub name: String,
    pub department: String,
    pub position: String,
    pub join_date: String,
}

impl From<EmployeeEdit> for UpdateEmployeeRequest {
    fn from(edit: EmployeeEdit) -> Self {
        UpdateEmployeeRequest {
            name: Some(edit.name),
            department: Some(edit.department),
            position: Some(edit.position),
            join_date: Some(edit.join_date),
            ..Default::default()
        }
    }
}

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl EmployeesRepository {
    pub fn new(api: ApiClient) -> Self {
        Self::new_with_client(Rc::new(api))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> LoadState<Vec<Employee>> {
        let result = self.client.get_employees().await;
        LoadState::from_result(result, |err| err.message_or(EMPLOYEES_LOAD_FAILED))
    }

    pub async fn get(&self, id: &str) -> LoadState<Employee> {
        let result = self.client.get_employee_by_id(id).await;
        LoadState::from_result(result, |_| EMPLOYEE_LOAD_FAILED.to_string())
    }

    /// Creates the login account first, then the employee record bound to it.
    ///
    /// If the second call fails the account is left behind; the backend owns cleanup.
    pub async fn register(&self, form: NewEmployeeForm) -> Result<Employee, String> {
        let user = self
            .client
            .create_user(&CreateUserRequest {
                email: form.email.clone(),
                password: form.password.clone(),
            })
            .await
            .map_err(|err| failure_message(&err, GENERIC_ERROR_MESSAGE))?;
        let request = form.into_request(user.id, Utc::now());
        self.client
            .create_employee(&request)
            .await
            .map_err(|err| failure_message(&err, GENERIC_ERROR_MESSAGE))
    }

    pub async fn update(&self, id: &str, edit: EmployeeEdit) -> Result<Employee, String> {
        self.client
            .update_employee(id, &edit.into())
            .await
            .map_err(|err| failure_message(&err, GENERIC_ERROR_MESSAGE))
    }

    pub async fn delete(&self, id: &str) -> Result<(), String> {
        self.client
            .delete_employee(id)
            .await
            .map_err(|err| failure_message(&err, EMPLOYEE_DELETE_FAILED))
    }

    /// Returns the notice to show once the salary is stored.
    pub async fn save_salary(
        &self,
        employee_id: &str,
        base_salary: f64,
        effective_date: NaiveDate,
    ) -> Result<String, String> {
        self.client
            .upsert_salary(
                employee_id,
                &UpsertSalaryRequest {
                    base_salary,
                    effective_date,
                },
            )
            .await
            .map(|_| SALARY_SAVED.to_string())
            .map_err(|err| failure_message(&err, SALARY_SAVE_FAILED))
    }
}
