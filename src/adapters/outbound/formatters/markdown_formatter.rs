use super::REMOVED_LIST_LIMIT;
use crate::application::read_models::{
    DirectDependencyView, ImpactReadModel, PackageView, RemovalView, SearchView,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for direct dependencies
const DIRECT_TABLE_HEADER: &str = "| Package | Range | Section |\n";

/// Markdown table separator line for direct dependencies
const DIRECT_TABLE_SEPARATOR: &str = "|---------|-------|---------|\n";

/// MarkdownFormatter adapter for a human-readable impact report
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn code_list(values: &[String]) -> String {
        if values.is_empty() {
            "-".to_string()
        } else {
            values
                .iter()
                .map(|v| format!("`{}`", v))
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, model: &ImpactReadModel) {
        output.push_str("# Dependency Impact Report\n\n");
        output.push_str(&format!(
            "Generated by {} {} at {}\n\n",
            model.metadata.tool_name, model.metadata.tool_version, model.metadata.timestamp
        ));
    }

    fn render_summary(&self, output: &mut String, model: &ImpactReadModel) {
        output.push_str("## Summary\n\n");
        output.push_str("| Metric | Value |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!("| Packages | {} |\n", model.summary.node_count));
        output.push_str(&format!(
            "| Dependency edges | {} |\n",
            model.summary.edge_count
        ));
        output.push_str(&format!(
            "| Direct dependencies | {} |\n\n",
            model.summary.direct_dependency_count
        ));
    }

    fn render_direct_dependencies(&self, output: &mut String, direct: &[DirectDependencyView]) {
        output.push_str("## Direct Dependencies\n\n");

        if direct.is_empty() {
            output.push_str("*No direct dependencies*\n\n");
            return;
        }

        output.push_str(DIRECT_TABLE_HEADER);
        output.push_str(DIRECT_TABLE_SEPARATOR);
        for dependency in direct {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&dependency.name),
                Self::escape_markdown_table_cell(&dependency.range),
                dependency.section
            ));
        }
        output.push('\n');
    }

    fn render_package(&self, output: &mut String, package: &PackageView) {
        output.push_str(&format!("## Package `{}`\n\n", package.name));
        output.push_str(&format!(
            "- **Versions:** {}\n",
            Self::code_list(&package.versions)
        ));
        output.push_str(&format!(
            "- **Depends on ({}):** {}\n",
            package.dependencies.len(),
            Self::code_list(&package.dependencies)
        ));
        output.push_str(&format!(
            "- **Depended by ({}):** {}\n\n",
            package.dependents.len(),
            Self::code_list(&package.dependents)
        ));
    }

    fn render_removal(&self, output: &mut String, removal: &RemovalView) {
        output.push_str(&format!("## Removal Preview: `{}`\n\n", removal.target));

        if !removal.is_direct_dependency {
            output.push_str(&format!(
                "> ⚠️ `{}` is not a direct dependency, so removing it changes nothing.\n\n",
                removal.target
            ));
        }

        output.push_str(&format!(
            "Removing `{}` would remove **{}** package(s); **{}** would remain.\n\n",
            removal.target,
            removal.removed.len(),
            removal.retained.len()
        ));

        if removal.removed.is_empty() {
            return;
        }

        output.push_str("| # | Package |\n");
        output.push_str("|---|---------|\n");
        for (index, name) in removal.removed.iter().take(REMOVED_LIST_LIMIT).enumerate() {
            output.push_str(&format!(
                "| {} | {} |\n",
                index + 1,
                Self::escape_markdown_table_cell(name)
            ));
        }
        if removal.removed.len() > REMOVED_LIST_LIMIT {
            output.push_str(&format!(
                "\n*... +{} more*\n",
                removal.removed.len() - REMOVED_LIST_LIMIT
            ));
        }
        output.push('\n');
    }

    fn render_search(&self, output: &mut String, search: &SearchView) {
        output.push_str(&format!("## Search: `{}`\n\n", search.query.trim()));

        if search.matches.is_empty() {
            output.push_str("*No matching packages*\n\n");
            return;
        }
        for name in &search.matches {
            output.push_str(&format!("- `{}`\n", name));
        }
        output.push('\n');
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, model: &ImpactReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model);
        self.render_summary(&mut output, model);
        self.render_direct_dependencies(&mut output, &model.direct_dependencies);
        if let Some(package) = &model.package {
            self.render_package(&mut output, package);
        }
        if let Some(removal) = &model.removal {
            self.render_removal(&mut output, removal);
        }
        if let Some(search) = &model.search {
            self.render_search(&mut output, search);
        }

        Ok(output)
    }
}
