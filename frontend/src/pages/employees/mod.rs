pub mod repository;
pub mod utils;

pub use repository::{EmployeeEdit, EmployeesRepository, NewEmployeeForm};
