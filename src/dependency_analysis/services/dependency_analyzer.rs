use super::{GraphBuilder, InputParser};
use crate::dependency_analysis::domain::DependencyGraph;
use crate::shared::error::AnalysisError;

/// DependencyAnalyzer service producing a graph from raw manifest and lockfile text
///
/// This service contains pure business logic. It has no I/O dependencies;
/// callers read the files and hand over their contents.
pub struct DependencyAnalyzer;

impl DependencyAnalyzer {
    /// Parses both inputs and builds the dependency graph
    ///
    /// # Arguments
    /// * `manifest` - Text of package.json
    /// * `lockfile` - Text of package-lock.json
    ///
    /// # Errors
    /// Returns `AnalysisError` when either input is malformed or neither contains dependency data
    pub fn analyze(manifest: &str, lockfile: &str) -> Result<DependencyGraph, AnalysisError> {
        let facts = InputParser::parse(manifest, lockfile)?;
        Ok(GraphBuilder::build(facts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_simple_chain() {
        let manifest = r#"{"dependencies":{"a":"^1.0.0"}}"#;
        let lockfile = r#"{"lockfileVersion":3,"packages":{
            "":{"name":"app"},
            "node_modules/a":{"version":"1.0.0","dependencies":{"b":"^1.0.0"}},
            "node_modules/b":{"version":"1.0.0"}}}"#;

        let graph = DependencyAnalyzer::analyze(manifest, lockfile).unwrap();

        assert_eq!(graph.node_names(), ["a", "b"]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.direct_dependencies().len(), 1);
        assert_eq!(graph.node("b").unwrap().dependents(), ["a"]);
    }

    #[test]
    fn test_analyze_manifest_only() {
        let graph =
            DependencyAnalyzer::analyze(r#"{"devDependencies":{"jest":"^29"}}"#, "{}").unwrap();

        assert_eq!(graph.node_names(), ["jest"]);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.node("jest").unwrap().versions().is_empty());
    }

    #[test]
    fn test_analyze_keeps_empty_manifest_key() {
        let graph = DependencyAnalyzer::analyze(r#"{"dependencies":{"":"1.0.0"}}"#, "{}").unwrap();

        assert_eq!(graph.node_names(), [""]);
        assert_eq!(graph.direct_dependencies().len(), 1);
        assert_eq!(graph.direct_dependencies()[0].range(), "1.0.0");
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_analyze_deeply_nested_legacy_lockfile() {
        let depth = 70;
        let mut lockfile = String::from(r#"{"lockfileVersion":1,"dependencies":"#);
        for i in 0..depth {
            lockfile.push_str(&format!(r#"{{"pkg-{}":{{"version":"2.0.0","dependencies":"#, i));
        }
        lockfile.push_str("{}");
        for _ in 0..depth {
            lockfile.push_str("}}");
        }
        lockfile.push('}');

        let graph = DependencyAnalyzer::analyze("{}", &lockfile).unwrap();

        assert_eq!(graph.node_count(), depth);
        assert_eq!(graph.edge_count(), depth - 1);
        assert_eq!(graph.node("pkg-69").unwrap().dependents(), ["pkg-68"]);
        assert_eq!(graph.node("pkg-0").unwrap().versions(), ["2.0.0"]);
    }

    #[test]
    fn test_analyze_propagates_parse_error() {
        let err = DependencyAnalyzer::analyze("{}", "{").unwrap_err();
        assert!(err.to_string().starts_with("Invalid lockfile: "));
    }

    #[test]
    fn test_analyze_no_data() {
        assert_eq!(
            DependencyAnalyzer::analyze("{}", "{}").unwrap_err(),
            AnalysisError::NoData
        );
    }
}
