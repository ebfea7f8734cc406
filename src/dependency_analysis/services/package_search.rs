use crate::dependency_analysis::domain::DependencyGraph;

/// PackageSearch service filtering graph nodes by a free-text query
pub struct PackageSearch;

impl PackageSearch {
    /// Node names containing `query`, case-insensitively, in graph order
    ///
    /// A blank query matches every node.
    pub fn filter<'g>(graph: &'g DependencyGraph, query: &str) -> Vec<&'g str> {
        let needle = query.trim().to_lowercase();

        graph
            .node_names()
            .iter()
            .map(String::as_str)
            .filter(|name| needle.is_empty() || name.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_analysis::services::DependencyAnalyzer;

    fn sample_graph() -> DependencyGraph {
        DependencyAnalyzer::analyze(
            r#"{"dependencies":{"React":"18","react-dom":"18","lodash":"4","@types/react":"18"}}"#,
            "{}",
        )
        .unwrap()
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let graph = sample_graph();
        assert_eq!(
            PackageSearch::filter(&graph, "REACT"),
            vec!["@types/react", "React", "react-dom"]
        );
    }

    #[test]
    fn test_blank_query_matches_everything() {
        let graph = sample_graph();
        assert_eq!(PackageSearch::filter(&graph, "  ").len(), 4);
        assert_eq!(PackageSearch::filter(&graph, "").len(), 4);
    }

    #[test]
    fn test_query_is_trimmed() {
        let graph = sample_graph();
        assert_eq!(PackageSearch::filter(&graph, " lodash "), vec!["lodash"]);
    }

    #[test]
    fn test_no_match() {
        let graph = sample_graph();
        assert!(PackageSearch::filter(&graph, "vue").is_empty());
    }
}
