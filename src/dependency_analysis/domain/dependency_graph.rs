use super::name_order::sort_names;
use super::{DirectDependency, PackageNode};
use std::collections::{HashMap, HashSet};

/// DependencyGraph aggregate representing the complete dependency structure
///
/// Built once per analysis by the graph builder and never mutated afterwards.
/// Every name referenced by an edge or a direct dependency has a node.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    nodes: HashMap<String, PackageNode>,
    node_names: Vec<String>,
    direct_dependencies: Vec<DirectDependency>,
    edge_count: usize,
}

impl DependencyGraph {
    pub(crate) fn new(
        nodes: HashMap<String, PackageNode>,
        node_names: Vec<String>,
        direct_dependencies: Vec<DirectDependency>,
        edge_count: usize,
    ) -> Self {
        Self {
            nodes,
            node_names,
            direct_dependencies,
            edge_count,
        }
    }

    pub fn node(&self, name: &str) -> Option<&PackageNode> {
        self.nodes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// All package names in sorted order
    pub fn node_names(&self) -> &[String] {
        &self.node_names
    }

    /// Nodes in the same order as [`Self::node_names`]
    pub fn nodes(&self) -> impl Iterator<Item = &PackageNode> + '_ {
        self.node_names.iter().filter_map(|name| self.nodes.get(name))
    }

    pub fn node_count(&self) -> usize {
        self.node_names.len()
    }

    /// Declared direct dependencies, one record per manifest entry
    pub fn direct_dependencies(&self) -> &[DirectDependency] {
        &self.direct_dependencies
    }

    /// Unique direct dependency names, sorted
    pub fn direct_dependency_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .direct_dependencies
            .iter()
            .map(|d| d.name().to_string())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        sort_names(&mut names);
        names
    }

    pub fn is_direct_dependency(&self, name: &str) -> bool {
        self.direct_dependencies.iter().any(|d| d.name() == name)
    }

    /// Name of the first declared direct dependency, if any
    pub fn first_direct_dependency(&self) -> Option<&str> {
        self.direct_dependencies.first().map(|d| d.name())
    }

    /// Number of forward edges (reverse edges are not counted)
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
