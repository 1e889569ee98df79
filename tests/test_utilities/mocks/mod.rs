/// Mock implementations for testing
mod mock_description_repository;
mod mock_module_graph_source;
mod mock_progress_reporter;
mod mock_workspace_provisioner;

pub use mock_description_repository::MockDescriptionRepository;
pub use mock_module_graph_source::MockModuleGraphSource;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_workspace_provisioner::MockWorkspaceProvisioner;
