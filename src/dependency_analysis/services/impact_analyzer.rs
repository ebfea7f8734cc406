use crate::dependency_analysis::domain::name_order::compare_names;
use crate::dependency_analysis::domain::{DependencyGraph, RemovalImpact};
use std::collections::HashSet;

/// ImpactAnalyzer service previewing the effect of dropping a direct dependency
///
/// Reachability is computed from every direct dependency name twice: once with
/// all roots and once without the removal target. Whatever falls out of the
/// second set is what uninstalling the target would prune.
pub struct ImpactAnalyzer;

impl ImpactAnalyzer {
    /// Previews removal of `remove_name`
    ///
    /// A name that is not a direct dependency leaves the root set unchanged,
    /// so the preview reports nothing removed.
    ///
    /// # Arguments
    /// * `graph` - The analyzed dependency graph
    /// * `remove_name` - Direct dependency to drop from the root set
    ///
    /// # Returns
    /// A RemovalImpact with `removed` and `retained` sorted by name
    pub fn preview_removal(graph: &DependencyGraph, remove_name: &str) -> RemovalImpact {
        let roots = graph.direct_dependency_names();

        let baseline = Self::reachable_from(graph, roots.iter().map(String::as_str));
        let remaining = Self::reachable_from(
            graph,
            roots
                .iter()
                .map(String::as_str)
                .filter(|root| *root != remove_name),
        );

        let mut removed: Vec<String> = baseline
            .difference(&remaining)
            .map(|name| name.to_string())
            .collect();
        removed.sort_by(|a, b| compare_names(a, b));

        let mut retained: Vec<String> = remaining.into_iter().map(str::to_string).collect();
        retained.sort_by(|a, b| compare_names(a, b));

        tracing::debug!(
            target_package = remove_name,
            removed = removed.len(),
            retained = retained.len(),
            "previewed removal"
        );

        RemovalImpact::new(remove_name.to_string(), removed, retained)
    }

    /// Names reachable from `roots` along dependency edges, roots included
    ///
    /// Iterative and cycle-safe. Roots without a node are still part of the result.
    pub fn reachable_from<'a, I>(graph: &'a DependencyGraph, roots: I) -> HashSet<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen: HashSet<&'a str> = HashSet::new();
        let mut stack: Vec<&'a str> = roots.into_iter().collect();

        while let Some(name) = stack.pop() {
            if !seen.insert(name) {
                continue;
            }
            if let Some(node) = graph.node(name) {
                stack.extend(
                    node.dependencies()
                        .iter()
                        .map(String::as_str)
                        .filter(|dependency| !seen.contains(dependency)),
                );
            }
        }

        seen
    }
}
