use crate::api::DeductionType;

pub const PAYROLLS_LOAD_FAILED: &str = "Failed to load payrolls.";
pub const PAYROLL_LOAD_FAILED: &str = "Failed to load payroll information.";
pub const PAYROLL_GENERATE_FAILED: &str =
    "An error occurred while generating payroll statements.";
pub const PAYROLL_DELETE_FAILED: &str = "An error occurred while deleting payroll statements.";

/// `YYYY-MM` part of a payment month such as `2024-05-01T00:00:00.000Z`.
pub fn payment_period(payment_month: &str) -> &str {
    payment_month.get(..7).unwrap_or(payment_month)
}

pub fn deduction_label(kind: DeductionType) -> &'static str {
    match kind {
        DeductionType::NationalPension => "National pension",
        DeductionType::HealthInsurance => "Health insurance",
        DeductionType::EmploymentInsurance => "Employment insurance",
        DeductionType::LongTermCareInsurance => "Long-term care insurance",
        DeductionType::IncomeTax => "Income tax",
        DeductionType::Other => "Other",
    }
}

pub fn generation_notice(count: u64) -> String {
    format!("Generated payroll statements for {} employees.", count)
}

pub fn deletion_notice(deleted: u64) -> String {
    format!("Deleted {} payroll statements.", deleted)
}
