use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Render the dependency graph of a Go module as a tree
#[derive(Parser, Debug)]
#[command(name = "deptree")]
#[command(version)]
#[command(
    about = "Render the dependency graph of a Go module as a tree",
    long_about = "Runs `go mod graph` and renders the result as a tree, or as a flat \
                  sorted list with --export. With --desc, each module is annotated \
                  with its GitHub repository description."
)]
pub struct Args {
    /// Path to the Go module to analyze (ignored with --package)
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// Analyze a remote package instead, e.g. github.com/spf13/cobra@v1.7.0
    #[arg(long, value_name = "PACKAGE")]
    pub package: Option<String>,

    /// Print a flat, sorted, deduplicated module list instead of a tree
    #[arg(short, long)]
    pub export: bool,

    /// Fetch a description for each module from the GitHub API
    #[arg(short, long)]
    pub desc: bool,

    /// GitHub token for API requests (falls back to GITHUB_TOKEN)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum number of concurrent GitHub requests (default: no limit)
    #[arg(long, value_name = "N")]
    pub concurrency: Option<NonZeroUsize>,

    /// Path to a config file (default: deptree.config.yml in the module directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Parses the process arguments, leaving exit handling to the caller
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Package to analyze, treating an empty value as absent
    pub fn requested_package(&self) -> Option<&str> {
        self.package.as_deref().filter(|p| !p.is_empty())
    }
}
