/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod deptree_request;
mod deptree_response;
mod output_mode;

pub use deptree_request::{DeptreeRequest, ModuleSource};
pub use deptree_response::{DependencyReport, DeptreeResponse};
pub use output_mode::OutputMode;
