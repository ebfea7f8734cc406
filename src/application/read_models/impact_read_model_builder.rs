//! Builder for constructing ImpactReadModel from an analysis response

use super::impact_read_model::{
    DirectDependencyView, GraphSummaryView, ImpactReadModel, MetadataView, PackageView,
    RemovalView, SearchView,
};
use crate::application::dto::AnalysisResponse;
use crate::dependency_analysis::domain::{DependencyGraph, RemovalImpact, ReportMetadata};

/// Builder for constructing ImpactReadModel from domain objects
pub struct ImpactReadModelBuilder;

impl ImpactReadModelBuilder {
    /// Builds the read model
    ///
    /// # Arguments
    /// * `response` - Output of the analyze-dependencies use case
    ///
    /// # Returns
    /// A fully constructed ImpactReadModel
    pub fn build(response: &AnalysisResponse) -> ImpactReadModel {
        let graph = &response.graph;

        ImpactReadModel {
            metadata: Self::build_metadata(&response.metadata),
            summary: Self::build_summary(graph),
            direct_dependencies: Self::build_direct_dependencies(graph),
            package: response
                .selected
                .as_deref()
                .and_then(|name| Self::build_package(graph, name)),
            removal: response
                .impact
                .as_ref()
                .map(|impact| Self::build_removal(graph, impact)),
            search: response.search.as_ref().map(|(query, matches)| SearchView {
                query: query.clone(),
                matches: matches.clone(),
            }),
            layout: response.layout.clone(),
        }
    }

    fn build_metadata(metadata: &ReportMetadata) -> MetadataView {
        MetadataView {
            timestamp: metadata.timestamp(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
        }
    }

    fn build_summary(graph: &DependencyGraph) -> GraphSummaryView {
        GraphSummaryView {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            direct_dependency_count: graph.direct_dependency_names().len(),
        }
    }

    fn build_direct_dependencies(graph: &DependencyGraph) -> Vec<DirectDependencyView> {
        graph
            .direct_dependencies()
            .iter()
            .map(|dependency| DirectDependencyView {
                name: dependency.name().to_string(),
                range: dependency.range().to_string(),
                section: dependency.section(),
            })
            .collect()
    }

    fn build_package(graph: &DependencyGraph, name: &str) -> Option<PackageView> {
        graph.node(name).map(|node| PackageView {
            name: node.name().to_string(),
            versions: node.versions().to_vec(),
            dependencies: node.dependencies().to_vec(),
            dependents: node.dependents().to_vec(),
        })
    }

    fn build_removal(graph: &DependencyGraph, impact: &RemovalImpact) -> RemovalView {
        RemovalView {
            target: impact.target().to_string(),
            is_direct_dependency: graph.is_direct_dependency(impact.target()),
            removed: impact.removed().to_vec(),
            retained: impact.retained().to_vec(),
        }
    }
}
