//! Business (use-case) layer sitting between the HTTP handlers and the
//! repository.

pub mod employees;

pub use employees::{EmployeeService, EmployeeUseCase};
