use crate::application::dto::{
    DependencyReport, DeptreeRequest, DeptreeResponse, ModuleSource, OutputMode,
};
use crate::application::use_cases::EnrichDescriptionsUseCase;
use crate::dependency_tree::domain::{Descriptions, EdgeMap};
use crate::dependency_tree::services::{EdgeListParser, ModuleCollector, TreeBuilder};
use crate::ports::outbound::{
    DescriptionRepository, ModuleGraphSource, ProgressReporter, WorkspaceProvisioner,
};
use crate::shared::Result;
use anyhow::Context;
use std::path::Path;

/// AnalyzeDependenciesUseCase - Core use case for rendering a module graph
///
/// Orchestrates one run: obtain the module graph (from a local module or a
/// throwaway workspace), build the tree, collect the flat list in export
/// mode and optionally fetch descriptions.
///
/// # Type Parameters
/// * `GS` - ModuleGraphSource implementation
/// * `WP` - WorkspaceProvisioner implementation
/// * `DR` - DescriptionRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeDependenciesUseCase<GS, WP, DR: DescriptionRepository, PR> {
    graph_source: GS,
    workspace_provisioner: WP,
    description_enricher: EnrichDescriptionsUseCase<DR>,
    progress_reporter: PR,
}

impl<GS, WP, DR, PR> AnalyzeDependenciesUseCase<GS, WP, DR, PR>
where
    GS: ModuleGraphSource,
    WP: WorkspaceProvisioner,
    DR: DescriptionRepository,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeDependenciesUseCase with injected dependencies
    pub fn new(
        graph_source: GS,
        workspace_provisioner: WP,
        description_repository: DR,
        progress_reporter: PR,
    ) -> Self {
        Self {
            graph_source,
            workspace_provisioner,
            description_enricher: EnrichDescriptionsUseCase::new(description_repository),
            progress_reporter,
        }
    }

    /// Executes the analysis
    ///
    /// # Returns
    /// A response without a report when the module graph has no edges
    ///
    /// # Errors
    /// Workspace setup and graph command failures abort the run. Description
    /// lookups never do.
    pub async fn execute(&self, request: DeptreeRequest) -> Result<DeptreeResponse> {
        // Step 1: Obtain and parse the module graph
        let edges = self.read_module_graph(&request.source).await?;

        // Step 2: Build the tree, re-rooted on the requested package if any
        let Some(mut tree) = TreeBuilder::build(&edges, request.source.requested_package())
        else {
            return Ok(DeptreeResponse::empty(request.output_mode));
        };
        self.progress_reporter.report(&format!(
            "🌳 Built dependency tree rooted at {} ({} node(s))",
            tree.root().name(),
            tree.node_count()
        ));

        // Step 3: Collect the flat list for export mode
        let modules = match request.output_mode {
            OutputMode::Export => ModuleCollector::collect(&edges),
            OutputMode::Tree => Vec::new(),
        };

        // Step 4: Fetch descriptions if requested
        let descriptions = if request.fetch_descriptions {
            let identifiers = match request.output_mode {
                OutputMode::Tree => tree.identifiers().into_iter().collect(),
                OutputMode::Export => modules.clone(),
            };
            let descriptions = self
                .fetch_descriptions(identifiers, request.max_concurrency)
                .await;
            tree.apply_descriptions(&descriptions);
            Some(descriptions)
        } else {
            None
        };

        Ok(DeptreeResponse::new(
            request.output_mode,
            Some(DependencyReport::new(tree, modules, descriptions)),
        ))
    }

    /// Reads the module graph for either a local module or a remote package
    async fn read_module_graph(&self, source: &ModuleSource) -> Result<EdgeMap> {
        match source {
            ModuleSource::LocalPath(path) => {
                self.progress_reporter.report(&format!(
                    "📖 Reading module graph from: {}",
                    path.display()
                ));
                self.read_edges(path).await
            }
            ModuleSource::RemotePackage(package) => {
                self.progress_reporter.report(&format!(
                    "📦 Resolving {} in a temporary workspace",
                    package
                ));
                let workspace = self
                    .workspace_provisioner
                    .provision(package)
                    .await
                    .context("failed to setup package")?;

                // The workspace directory is removed when `workspace` drops.
                self.read_edges(workspace.path()).await
            }
        }
    }

    async fn read_edges(&self, dir: &Path) -> Result<EdgeMap> {
        let output = self
            .graph_source
            .module_graph(dir)
            .await
            .context("failed to get dependencies")?;

        let edges = EdgeListParser::parse_reader(output.as_slice())?;
        self.progress_reporter.report(&format!(
            "✅ Detected {} module(s) with {} edge(s)",
            edges.len(),
            edges.edge_count()
        ));

        Ok(edges)
    }

    async fn fetch_descriptions(
        &self,
        identifiers: Vec<String>,
        max_concurrency: Option<usize>,
    ) -> Descriptions {
        self.progress_reporter.report(&format!(
            "🔍 Fetching descriptions for {} module(s) from GitHub...",
            identifiers.len()
        ));

        let outcome = self
            .description_enricher
            .enrich_with_progress(identifiers, max_concurrency, |current, total, identifier| {
                self.progress_reporter
                    .report_progress(current, total, Some(identifier));
            })
            .await;

        self.progress_reporter.report_completion(&format!(
            "✅ Descriptions fetched: {} succeeded, {} failed",
            outcome.succeeded, outcome.failed
        ));

        outcome.descriptions
    }
}
