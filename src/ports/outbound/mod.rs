/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (subprocesses, network, console, etc.).
pub mod description_repository;
pub mod formatter;
pub mod module_graph_source;
pub mod output_presenter;
pub mod progress_reporter;
pub mod workspace_provisioner;

pub use description_repository::DescriptionRepository;
pub use formatter::DependencyFormatter;
pub use module_graph_source::ModuleGraphSource;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use workspace_provisioner::{ProvisionedWorkspace, WorkspaceProvisioner};
