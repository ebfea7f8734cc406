use crate::application::dto::{AnalysisRequest, AnalysisResponse};
use crate::dependency_analysis::domain::{DependencyGraph, GraphLayout, RemovalImpact};
use crate::dependency_analysis::services::{
    DependencyAnalyzer, FocusSelector, ImpactAnalyzer, LayoutEngine, PackageSearch,
    ReportMetadataGenerator,
};
use crate::ports::outbound::{InputReader, ProgressReporter};
use crate::shared::Result;

/// AnalyzeDependenciesUseCase - Core use case for dependency impact analysis
///
/// Orchestrates reading the inputs, building the graph, previewing a removal,
/// and laying out the focus neighborhood, with infrastructure injected
/// through generics.
///
/// # Type Parameters
/// * `IR` - InputReader implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeDependenciesUseCase<IR, PR> {
    input_reader: IR,
    progress_reporter: PR,
}

impl<IR, PR> AnalyzeDependenciesUseCase<IR, PR>
where
    IR: InputReader,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeDependenciesUseCase with injected dependencies
    pub fn new(input_reader: IR, progress_reporter: PR) -> Self {
        Self {
            input_reader,
            progress_reporter,
        }
    }

    /// Executes the analysis
    ///
    /// # Arguments
    /// * `request` - Input paths, optional package/removal/search choices, layout limits
    ///
    /// # Returns
    /// AnalysisResponse with the graph, removal impact, layout, and metadata
    ///
    /// # Errors
    /// - I/O and file-safety errors from the input reader
    /// - `AnalysisError` when the input pair is rejected
    pub fn execute(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        // Step 1: Read and analyze both inputs
        let graph = self.read_and_analyze(&request)?;

        // Step 2: Resolve inspected package and removal target
        let selected = self.resolve_selection(&graph, request.package.as_deref());
        let remove_target = request
            .remove
            .clone()
            .or_else(|| FocusSelector::default_removal_target(&graph));

        // Step 3: Preview the removal
        let impact = remove_target
            .as_deref()
            .map(|target| self.preview_removal(&graph, target));

        // Step 4: Lay out the focus neighborhood
        let focus = FocusSelector::resolve(&graph, selected.as_deref(), remove_target.as_deref());
        let layout = focus
            .as_deref()
            .map(|focus| {
                LayoutEngine::build_with_impact(&graph, focus, request.layout, impact.as_ref())
            })
            .unwrap_or_else(GraphLayout::empty);
        if let Some(focus) = layout.focus.as_deref() {
            self.progress_reporter.report_completion(&format!(
                "🗺️  Laid out {} package(s) around '{}'",
                layout.nodes.len(),
                focus
            ));
        }

        // Step 5: Optional search
        let search = request.search.as_ref().map(|query| {
            let matches: Vec<String> = PackageSearch::filter(&graph, query)
                .into_iter()
                .map(str::to_string)
                .collect();
            self.progress_reporter.report(&format!(
                "🔍 Search \"{}\" matched {} package(s)",
                query.trim(),
                matches.len()
            ));
            (query.clone(), matches)
        });

        Ok(AnalysisResponse {
            graph,
            selected,
            remove_target,
            impact,
            layout,
            layout_options: request.layout,
            search,
            metadata: ReportMetadataGenerator::generate_metadata(),
        })
    }

    fn read_and_analyze(&self, request: &AnalysisRequest) -> Result<DependencyGraph> {
        self.progress_reporter.report(&format!(
            "📖 Loading manifest from: {}",
            request.manifest_path.display()
        ));
        let manifest = self.input_reader.read_manifest(&request.manifest_path)?;

        self.progress_reporter.report(&format!(
            "📖 Loading lockfile from: {}",
            request.lockfile_path.display()
        ));
        let lockfile = self.input_reader.read_lockfile(&request.lockfile_path)?;

        let graph = DependencyAnalyzer::analyze(&manifest, &lockfile)?;

        self.progress_reporter.report(&format!(
            "✅ Built dependency graph: {} package(s), {} edge(s), {} direct dependency name(s)",
            graph.node_count(),
            graph.edge_count(),
            graph.direct_dependency_names().len()
        ));

        Ok(graph)
    }

    /// Explicit choice when it exists, otherwise the default selection
    fn resolve_selection(&self, graph: &DependencyGraph, requested: Option<&str>) -> Option<String> {
        match requested {
            Some(name) if graph.contains(name) => Some(name.to_string()),
            Some(name) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Package '{}' was not found in the dependency graph.",
                    name
                ));
                None
            }
            None => FocusSelector::default_selection(graph),
        }
    }

    fn preview_removal(&self, graph: &DependencyGraph, target: &str) -> RemovalImpact {
        if !graph.is_direct_dependency(target) {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: '{}' is not a direct dependency; removing it changes nothing.",
                target
            ));
        }

        let impact = ImpactAnalyzer::preview_removal(graph, target);
        self.progress_reporter.report(&format!(
            "🧮 Removing '{}' would drop {} package(s)",
            target,
            impact.removed_count()
        ));
        impact
    }
}

#[cfg(test)]
mod tests;
