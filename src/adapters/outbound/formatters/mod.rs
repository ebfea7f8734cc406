/// Formatter adapters for the supported report formats
mod json_formatter;
mod markdown_formatter;
mod svg_formatter;
mod text_formatter;

pub use json_formatter::JsonFormatter;
pub use markdown_formatter::MarkdownFormatter;
pub use svg_formatter::SvgFormatter;
pub use text_formatter::TextFormatter;

/// Removed packages listed before the remainder is summarized
pub(crate) const REMOVED_LIST_LIMIT: usize = 300;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::application::read_models::{
        DirectDependencyView, GraphSummaryView, ImpactReadModel, MetadataView, PackageView,
        RemovalView, SearchView,
    };
    use crate::dependency_analysis::domain::{DependencySection, LayoutOptions};
    use crate::dependency_analysis::services::{DependencyAnalyzer, ImpactAnalyzer, LayoutEngine};

    /// Read model for `app -> express -> {body-parser, debug}` with express removed
    pub fn sample_model() -> ImpactReadModel {
        let graph = DependencyAnalyzer::analyze(
            r#"{"dependencies":{"express":"^4.18.0"},"devDependencies":{"jest":"^29.0.0"}}"#,
            r#"{"packages":{
                "node_modules/express":{"version":"4.18.2","dependencies":{"body-parser":"*","debug":"*"}},
                "node_modules/body-parser":{"version":"1.20.1","dependencies":{"debug":"*"}},
                "node_modules/debug":{"version":"2.6.9"},
                "node_modules/jest":{"version":"29.7.0"}}}"#,
        )
        .unwrap();
        let impact = ImpactAnalyzer::preview_removal(&graph, "express");
        let layout =
            LayoutEngine::build_with_impact(&graph, "express", LayoutOptions::default(), Some(&impact));

        ImpactReadModel {
            metadata: MetadataView {
                timestamp: "2024-01-01T00:00:00Z".to_string(),
                tool_name: "dep-impact".to_string(),
                tool_version: "0.1.0".to_string(),
            },
            summary: GraphSummaryView {
                node_count: 4,
                edge_count: 3,
                direct_dependency_count: 2,
            },
            direct_dependencies: vec![
                DirectDependencyView {
                    name: "express".to_string(),
                    range: "^4.18.0".to_string(),
                    section: DependencySection::Dependencies,
                },
                DirectDependencyView {
                    name: "jest".to_string(),
                    range: "^29.0.0".to_string(),
                    section: DependencySection::DevDependencies,
                },
            ],
            package: Some(PackageView {
                name: "express".to_string(),
                versions: vec!["4.18.2".to_string()],
                dependencies: vec!["body-parser".to_string(), "debug".to_string()],
                dependents: Vec::new(),
            }),
            removal: Some(RemovalView {
                target: "express".to_string(),
                is_direct_dependency: true,
                removed: impact.removed().to_vec(),
                retained: impact.retained().to_vec(),
            }),
            search: Some(SearchView {
                query: "de".to_string(),
                matches: vec!["debug".to_string()],
            }),
            layout,
        }
    }
}
