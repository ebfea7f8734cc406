use crate::dependency_analysis::domain::DependencyGraph;

/// FocusSelector service choosing which packages a view centers on
///
/// Mirrors how an explorer picks its defaults: inspect the first declared
/// direct dependency, and preview removing it.
pub struct FocusSelector;

impl FocusSelector {
    /// Package to inspect when none was requested
    ///
    /// The first declared direct dependency, else the first node by name.
    pub fn default_selection(graph: &DependencyGraph) -> Option<String> {
        graph
            .first_direct_dependency()
            .or_else(|| graph.node_names().first().map(String::as_str))
            .map(str::to_string)
    }

    /// Direct dependency to preview removing when none was requested
    pub fn default_removal_target(graph: &DependencyGraph) -> Option<String> {
        graph.first_direct_dependency().map(str::to_string)
    }

    /// Resolves the layout focus
    ///
    /// The selected package when it exists in the graph, otherwise the
    /// removal target when it exists, otherwise the first node by name.
    ///
    /// # Arguments
    /// * `graph` - The analyzed dependency graph
    /// * `selected` - Package the user asked to inspect
    /// * `remove_target` - Package whose removal is being previewed
    pub fn resolve(
        graph: &DependencyGraph,
        selected: Option<&str>,
        remove_target: Option<&str>,
    ) -> Option<String> {
        [selected, remove_target]
            .into_iter()
            .flatten()
            .find(|name| graph.contains(name))
            .or_else(|| graph.node_names().first().map(String::as_str))
            .map(str::to_string)
    }
}
