use crate::dependency_analysis::domain::{
    DependencyGraph, GraphLayout, LayoutOptions, RemovalImpact, ReportMetadata,
};

/// AnalysisResponse - Result of the analyze-dependencies use case
///
/// Carries domain objects; formatters never see it directly and work
/// from the read model built out of it instead.
#[derive(Debug, Clone)]
pub struct AnalysisResponse {
    pub graph: DependencyGraph,
    /// Package shown in the inspection section, if it exists in the graph
    pub selected: Option<String>,
    /// Removal target, explicit or defaulted
    pub remove_target: Option<String>,
    pub impact: Option<RemovalImpact>,
    pub layout: GraphLayout,
    pub layout_options: LayoutOptions,
    /// Query and its matching node names, when a search was requested
    pub search: Option<(String, Vec<String>)>,
    pub metadata: ReportMetadata,
}
