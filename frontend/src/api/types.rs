use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentType {
    FullTime,
    Contract,
    Intern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentStatus {
    Employed,
    OnLeave,
    Resigned,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Salary {
    pub base_salary: f64,
    pub effective_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub employee_number: String,
    pub name: String,
    pub user: User,
    pub user_id: String,
    pub join_date: String,
    pub resident_registration_number: String,
    pub phone_number: String,
    pub department: String,
    pub position: String,
    pub employment_type: EmploymentType,
    pub bank_name: String,
    pub bank_account_number: String,
    pub resignation_date: Option<String>,
    pub status: EmploymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<Salary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    pub user_id: String,
    pub employee_number: String,
    pub name: String,
    pub join_date: String,
    pub resident_registration_number: String,
    pub phone_number: String,
    pub department: String,
    pub position: String,
    pub employment_type: EmploymentType,
    pub bank_name: String,
    pub bank_account_number: String,
    pub resignation_date: Option<String>,
    pub status: EmploymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
}

/// Partial update: only the fields that are set go on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resident_registration_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<EmploymentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resignation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EmploymentStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertSalaryRequest {
    pub base_salary: f64,
    pub effective_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeAccount {
    pub email: String,
}

/// Employee fields embedded in attendance, leave and payroll rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<EmployeeAccount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: String,
    pub clock_in_time: DateTime<Utc>,
    pub clock_out_time: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub employee: EmployeeSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveType {
    AnnualLeave,
    SickLeave,
    BereavementLeave,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }
}

/// The two outcomes an administrator can record on a pending leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveDecision {
    Approved,
    Rejected,
}

impl From<LeaveDecision> for LeaveStatus {
    fn from(decision: LeaveDecision) -> Self {
        match decision {
            LeaveDecision::Approved => LeaveStatus::Approved,
            LeaveDecision::Rejected => LeaveStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateLeaveStatusRequest {
    pub status: LeaveDecision,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: Option<String>,
    pub status: LeaveStatus,
    pub leave_type: LeaveType,
    pub employee: EmployeeSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeductionType {
    NationalPension,
    HealthInsurance,
    EmploymentInsurance,
    LongTermCareInsurance,
    IncomeTax,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deduction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: DeductionType,
    pub amount: f64,
}

/// Payroll row as computed by the backend. Totals are displayed, never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payroll {
    pub id: String,
    pub payment_month: String,
    pub base_salary: f64,
    pub bonus: f64,
    pub deductions: Vec<Deduction>,
    pub total_deductions: f64,
    pub net_pay: f64,
    pub employee: EmployeeSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratePayrollsResponse {
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePayrollsResponse {
    pub deleted_count: u64,
}

pub const GENERIC_ERROR_MESSAGE: &str = "An unknown error occurred.";

/// Decoded `message` field of a failure body (`{ "message": string | string[] }`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ErrorMessage {
    List(Vec<String>),
    Single(String),
    #[default]
    Unknown,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MessageField {
    List(Vec<String>),
    Single(String),
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    message: Option<MessageField>,
}

impl ErrorMessage {
    pub fn decode(body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorEnvelope>(body) {
            Ok(ErrorEnvelope {
                message: Some(MessageField::List(items)),
            }) => ErrorMessage::List(items),
            Ok(ErrorEnvelope {
                message: Some(MessageField::Single(text)),
            }) => ErrorMessage::Single(text),
            Ok(ErrorEnvelope { message: None }) | Err(_) => ErrorMessage::Unknown,
        }
    }

    pub fn text(&self) -> Option<String> {
        match self {
            ErrorMessage::List(items) if !items.is_empty() => Some(items.join(", ")),
            ErrorMessage::List(_) => None,
            ErrorMessage::Single(text) => Some(text.clone()),
            ErrorMessage::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("request failed with status {status}")]
    Http { status: u16, message: ErrorMessage },
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("session storage unavailable: {0}")]
    Session(String),
    #[error("{0} is not supported by this client")]
    Unsupported(&'static str),
}

impl ApiError {
    pub fn request_failed(msg: impl Into<String>) -> Self {
        ApiError::Transport(msg.into())
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn message_or(&self, fallback: &str) -> String {
        let text = match self {
            ApiError::Http { message, .. } => message.text(),
            _ => None,
        };
        text.unwrap_or_else(|| fallback.to_string())
    }

    /// Message shown to the user: the backend's own text when it sent one.
    pub fn user_message(&self) -> String {
        self.message_or(GENERIC_ERROR_MESSAGE)
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = match self {
            LeaveStatus::Pending => "PENDING",
            LeaveStatus::Approved => "APPROVED",
            LeaveStatus::Rejected => "REJECTED",
        };
        f.write_str(raw)
    }
}
