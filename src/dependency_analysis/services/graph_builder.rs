use crate::dependency_analysis::domain::name_order::{compare_names, sort_names};
use crate::dependency_analysis::domain::{DependencyGraph, ExtractedFacts, PackageNode};
use std::collections::{HashMap, HashSet};

/// Mutable accumulator for one node while facts are being folded in
#[derive(Debug, Default)]
struct NodeDraft {
    versions: HashSet<String>,
    dependencies: HashSet<String>,
    dependents: HashSet<String>,
}

/// GraphBuilder service assembling a DependencyGraph from extracted facts
///
/// Nodes are materialized eagerly for every name seen, so lookups never
/// create state. Dependents are derived in a single pass once every forward
/// edge is known, then all collections are frozen in name order.
pub struct GraphBuilder;

impl GraphBuilder {
    /// Builds the immutable graph
    ///
    /// # Arguments
    /// * `facts` - Records, edges, and direct dependencies from the input parser
    ///
    /// # Returns
    /// A DependencyGraph where every edge endpoint and direct dependency has a node
    pub fn build(facts: ExtractedFacts) -> DependencyGraph {
        let ExtractedFacts {
            direct_dependencies,
            records,
            edges,
        } = facts;

        let mut drafts: HashMap<String, NodeDraft> = HashMap::new();

        for record in records {
            let draft = drafts.entry(record.name).or_default();
            if let Some(version) = record.version {
                draft.versions.insert(version);
            }
        }

        for (from, to) in edges {
            drafts.entry(to.clone()).or_default();
            drafts.entry(from).or_default().dependencies.insert(to);
        }

        for direct in &direct_dependencies {
            drafts.entry(direct.name().to_string()).or_default();
        }

        let reverse_edges: Vec<(String, String)> = drafts
            .iter()
            .flat_map(|(name, draft)| {
                draft
                    .dependencies
                    .iter()
                    .map(move |dependency| (dependency.clone(), name.clone()))
            })
            .collect();
        for (dependency, dependent) in reverse_edges {
            drafts
                .entry(dependency)
                .or_default()
                .dependents
                .insert(dependent);
        }

        let mut node_names: Vec<String> = drafts.keys().cloned().collect();
        sort_names(&mut node_names);

        let mut edge_count = 0;
        let nodes: HashMap<String, PackageNode> = drafts
            .into_iter()
            .map(|(name, draft)| {
                let dependencies = into_sorted(draft.dependencies);
                edge_count += dependencies.len();
                let node = PackageNode::new(
                    name.clone(),
                    into_sorted(draft.versions),
                    dependencies,
                    into_sorted(draft.dependents),
                );
                (name, node)
            })
            .collect();

        tracing::debug!(
            nodes = nodes.len(),
            edges = edge_count,
            direct = direct_dependencies.len(),
            "built dependency graph"
        );

        DependencyGraph::new(nodes, node_names, direct_dependencies, edge_count)
    }
}

fn into_sorted(set: HashSet<String>) -> Vec<String> {
    let mut values: Vec<String> = set.into_iter().collect();
    values.sort_by(|a, b| compare_names(a, b));
    values
}
