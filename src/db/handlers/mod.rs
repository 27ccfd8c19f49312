//! Repository implementations for the employees table.

pub mod employees;
pub mod repository;

pub use employees::Employees;
pub use repository::EmployeeRepository;
