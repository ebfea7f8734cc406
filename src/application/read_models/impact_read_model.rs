//! Impact read model for report rendering

use crate::dependency_analysis::domain::{DependencySection, GraphLayout};
use serde::Serialize;

/// Main read model for a dependency impact report
///
/// Serialized as-is by the JSON formatter, so field names are part of the
/// JSON output contract.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactReadModel {
    pub metadata: MetadataView,
    pub summary: GraphSummaryView,
    pub direct_dependencies: Vec<DirectDependencyView>,
    /// Inspected package, absent when the requested name is not in the graph
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<PackageView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removal: Option<RemovalView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchView>,
    pub layout: GraphLayout,
}

/// View representation of report metadata
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
}

/// Headline counts for the analyzed graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSummaryView {
    pub node_count: usize,
    pub edge_count: usize,
    /// Unique names across all manifest sections
    pub direct_dependency_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectDependencyView {
    pub name: String,
    pub range: String,
    pub section: DependencySection,
}

/// One package with both edge directions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageView {
    pub name: String,
    pub versions: Vec<String>,
    pub dependencies: Vec<String>,
    pub dependents: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovalView {
    pub target: String,
    pub is_direct_dependency: bool,
    pub removed: Vec<String>,
    pub retained: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchView {
    pub query: String,
    pub matches: Vec<String>,
}
