pub mod dependency_analyzer;
pub mod focus_selector;
pub mod graph_builder;
pub mod impact_analyzer;
pub mod input_parser;
pub mod layout_engine;
pub mod package_search;
pub mod report_metadata_generator;

pub use dependency_analyzer::DependencyAnalyzer;
pub use focus_selector::FocusSelector;
pub use graph_builder::GraphBuilder;
pub use impact_analyzer::ImpactAnalyzer;
pub use input_parser::InputParser;
pub use layout_engine::LayoutEngine;
pub use package_search::PackageSearch;
pub use report_metadata_generator::ReportMetadataGenerator;
