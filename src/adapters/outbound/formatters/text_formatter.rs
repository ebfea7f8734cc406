use super::REMOVED_LIST_LIMIT;
use crate::application::read_models::{ImpactReadModel, PackageView, RemovalView, SearchView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// TextFormatter adapter producing the plain-text impact report
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn join_or_dash(values: &[String]) -> String {
        if values.is_empty() {
            "-".to_string()
        } else {
            values.join(", ")
        }
    }

    fn render_package(lines: &mut Vec<String>, package: &PackageView) {
        lines.push(String::new());
        lines.push(format!("Package: {}", package.name));
        lines.push(format!("Versions: {}", Self::join_or_dash(&package.versions)));
        lines.push(format!(
            "Depends on ({}): {}",
            package.dependencies.len(),
            Self::join_or_dash(&package.dependencies)
        ));
        lines.push(format!(
            "Depended by ({}): {}",
            package.dependents.len(),
            Self::join_or_dash(&package.dependents)
        ));
    }

    fn render_removal(lines: &mut Vec<String>, removal: &RemovalView) {
        lines.push(String::new());
        lines.push(format!("Remove target: {}", removal.target));
        lines.push(format!("Would be removed ({}):", removal.removed.len()));
        lines.extend(
            removal
                .removed
                .iter()
                .take(REMOVED_LIST_LIMIT)
                .map(|name| format!("- {}", name)),
        );
        if removal.removed.len() > REMOVED_LIST_LIMIT {
            lines.push(format!(
                "... +{} more",
                removal.removed.len() - REMOVED_LIST_LIMIT
            ));
        }
    }

    fn render_search(lines: &mut Vec<String>, search: &SearchView) {
        lines.push(String::new());
        lines.push(format!(
            "Search \"{}\" ({}):",
            search.query.trim(),
            search.matches.len()
        ));
        lines.extend(search.matches.iter().map(|name| format!("- {}", name)));
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, model: &ImpactReadModel) -> Result<String> {
        let mut lines = vec![
            "Dependency Impact Report".to_string(),
            format!("Nodes: {}", model.summary.node_count),
            format!("Edges: {}", model.summary.edge_count),
            format!(
                "Direct dependencies: {}",
                model.summary.direct_dependency_count
            ),
        ];

        if let Some(package) = &model.package {
            Self::render_package(&mut lines, package);
        }
        if let Some(removal) = &model.removal {
            Self::render_removal(&mut lines, removal);
        }
        if let Some(search) = &model.search {
            Self::render_search(&mut lines, search);
        }

        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::sample_model;
    use super::*;

    #[test]
    fn test_format_full_report() {
        let report = TextFormatter::new().format(&sample_model()).unwrap();

        let expected = "\
Dependency Impact Report
Nodes: 4
Edges: 3
Direct dependencies: 2

Package: express
Versions: 4.18.2
Depends on (2): body-parser, debug
Depended by (0): -

Remove target: express
Would be removed (3):
- body-parser
- debug
- express

Search \"de\" (1):
- debug";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_format_summary_only() {
        let mut model = sample_model();
        model.package = None;
        model.removal = None;
        model.search = None;

        let report = TextFormatter::new().format(&model).unwrap();
        assert_eq!(
            report,
            "Dependency Impact Report\nNodes: 4\nEdges: 3\nDirect dependencies: 2"
        );
    }

    #[test]
    fn test_removed_list_is_capped() {
        let mut model = sample_model();
        if let Some(removal) = model.removal.as_mut() {
            removal.removed = (0..305).map(|i| format!("pkg-{:03}", i)).collect();
        }

        let report = TextFormatter::new().format(&model).unwrap();

        assert!(report.contains("Would be removed (305):"));
        assert!(report.contains("- pkg-299"));
        assert!(!report.contains("- pkg-300"));
        assert!(report.contains("... +5 more"));
    }
}
