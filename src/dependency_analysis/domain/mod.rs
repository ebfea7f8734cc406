pub mod dependency_graph;
pub mod direct_dependency;
pub mod extracted_facts;
pub mod graph_layout;
pub mod name_order;
pub mod package_node;
pub mod removal_impact;
pub mod report_metadata;

pub use dependency_graph::DependencyGraph;
pub use direct_dependency::{DependencySection, DirectDependency};
pub use extracted_facts::{ExtractedFacts, PackageRecord};
pub use graph_layout::{GraphLayout, LayoutEdge, LayoutNode, LayoutOptions, NodeRole};
pub use package_node::PackageNode;
pub use removal_impact::RemovalImpact;
pub use report_metadata::ReportMetadata;
