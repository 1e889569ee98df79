use crate::dependency_tree::domain::identifier::{strip_version, WORKSPACE_MODULE};
use crate::ports::outbound::{ModuleGraphSource, ProvisionedWorkspace, WorkspaceProvisioner};
use crate::shared::error::DeptreeError;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Output;
use tokio::process::Command;

/// GoToolchain adapter driving the `go` command
///
/// Implements both ModuleGraphSource (`go mod graph`) and
/// WorkspaceProvisioner (`go mod init temp` + `go get <package>` in a
/// temporary directory).
#[derive(Debug, Clone)]
pub struct GoToolchain {
    program: PathBuf,
}

impl GoToolchain {
    pub fn new() -> Self {
        Self::with_program("go")
    }

    /// Uses a specific `go` binary instead of the one found on `PATH`
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    async fn run(&self, dir: &Path, args: &[&str]) -> Result<Output> {
        let output = Command::new(&self.program)
            .args(args)
            .current_dir(dir)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| DeptreeError::CommandFailed {
                command: Self::display_command(args),
                details: e.to_string(),
            })?;
        Ok(output)
    }

    fn display_command(args: &[&str]) -> String {
        format!("go {}", args.join(" "))
    }

    fn combined_output(output: &Output) -> String {
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        combined
    }

    fn main_go_source(package: &str) -> String {
        format!(
            "package main\n\nimport _ \"{}\"\n\nfunc main() {{}}\n",
            strip_version(package)
        )
    }
}

impl Default for GoToolchain {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ModuleGraphSource for GoToolchain {
    async fn module_graph(&self, project_dir: &Path) -> Result<Vec<u8>> {
        let args = ["mod", "graph"];
        let output = self.run(project_dir, &args).await?;

        if !output.status.success() {
            return Err(DeptreeError::CommandFailed {
                command: Self::display_command(&args),
                details: format!(
                    "{}\nOutput: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim_end()
                ),
            }
            .into());
        }

        Ok(output.stdout)
    }
}

#[async_trait]
impl WorkspaceProvisioner for GoToolchain {
    async fn provision(&self, package: &str) -> Result<ProvisionedWorkspace> {
        let dir = tempfile::Builder::new()
            .prefix("deptree-")
            .tempdir()
            .map_err(|e| DeptreeError::WorkspaceSetup {
                details: format!("failed to create temp directory: {}", e),
            })?;

        let init_args = ["mod", "init", WORKSPACE_MODULE];
        let init = self.run(dir.path(), &init_args).await?;
        if !init.status.success() {
            return Err(DeptreeError::CommandFailed {
                command: Self::display_command(&init_args),
                details: init.status.to_string(),
            }
            .into());
        }

        let get_args = ["get", package];
        let get = self.run(dir.path(), &get_args).await?;
        if !get.status.success() {
            return Err(DeptreeError::CommandFailed {
                command: Self::display_command(&get_args),
                details: format!("{}\nOutput: {}", get.status, Self::combined_output(&get)),
            }
            .into());
        }

        let main_go = dir.path().join("main.go");
        tokio::fs::write(&main_go, Self::main_go_source(package))
            .await
            .map_err(|e| DeptreeError::WorkspaceSetup {
                details: format!("failed to write main.go: {}", e),
            })?;

        Ok(ProvisionedWorkspace::new(dir))
    }
}
