mod cli;

use cli::Args;
use deptree::adapters::outbound::console::StderrProgressReporter;
use deptree::adapters::outbound::network::{
    CachingDescriptionRepository, GitHubDescriptionRepository,
};
use deptree::adapters::outbound::toolchain::GoToolchain;
use deptree::application::dto::{DeptreeRequest, ModuleSource, OutputMode};
use deptree::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use deptree::application::use_cases::AnalyzeDependenciesUseCase;
use deptree::config::{self, ConfigFile};
use deptree::shared::error::{DeptreeError, ExitCode};
use deptree::shared::Result;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    let args = match Args::parse_args() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version are reported as "errors" on stdout.
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args).await {
        eprintln!("Error: {:#}", e);
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let source = match args.requested_package() {
        Some(package) => ModuleSource::RemotePackage(package.to_string()),
        None => {
            validate_project_path(&args.path)?;
            ModuleSource::LocalPath(args.path.clone())
        }
    };

    let config = load_config(&args, &source)?;
    let output_mode = OutputMode::from_export_flag(args.export || config.export.unwrap_or(false));
    let fetch_descriptions = args.desc || config.desc.unwrap_or(false);
    let max_concurrency = args
        .concurrency
        .map(|n| n.get())
        .or(config.max_concurrency);

    // Create adapters (Dependency Injection)
    let toolchain = GoToolchain::new();
    let description_repository =
        CachingDescriptionRepository::new(GitHubDescriptionRepository::new(args.token.clone())?);
    let progress_reporter = StderrProgressReporter::new();
    config::report_unknown_fields(&config, &progress_reporter);

    let use_case = AnalyzeDependenciesUseCase::new(
        toolchain.clone(),
        toolchain,
        description_repository,
        progress_reporter,
    );

    let request = DeptreeRequest::new(source, output_mode, fetch_descriptions, max_concurrency);
    let response = use_case.execute(request).await?;

    let Some(report) = response.report else {
        println!("No dependencies found");
        return Ok(());
    };

    let formatter = FormatterFactory::create(response.output_mode);
    let formatted_output = formatter.format(&report)?;

    let presenter = PresenterFactory::create(PresenterType::from_output_path(args.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

/// Loads the explicit `--config` file, or discovers one next to the module
///
/// Remote packages have no module directory, so discovery falls back to
/// the current directory.
fn load_config(args: &Args, source: &ModuleSource) -> Result<ConfigFile> {
    if let Some(path) = &args.config {
        return config::load_config_from_path(path);
    }

    let dir = match source {
        ModuleSource::LocalPath(path) => path.as_path(),
        ModuleSource::RemotePackage(_) => Path::new("."),
    };
    Ok(config::discover_config(dir)?.unwrap_or_default())
}

fn validate_project_path(path: &Path) -> Result<()> {
    let invalid = |reason: String| DeptreeError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason,
    };

    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            invalid("Directory does not exist".to_string())
        } else {
            invalid(format!("Failed to read path metadata: {}", e))
        }
    })?;

    if !metadata.is_dir() {
        return Err(invalid("Not a directory".to_string()).into());
    }

    Ok(())
}
