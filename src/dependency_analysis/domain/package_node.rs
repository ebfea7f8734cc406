use serde::Serialize;

/// A package in the dependency graph, keyed by name
///
/// Edges are by name only; a package installed at several versions is a
/// single node carrying every observed version. `dependents` is the derived
/// inverse of every other node's `dependencies` and is only ever computed by
/// the graph builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageNode {
    name: String,
    versions: Vec<String>,
    dependencies: Vec<String>,
    dependents: Vec<String>,
}

impl PackageNode {
    pub(crate) fn new(
        name: String,
        versions: Vec<String>,
        dependencies: Vec<String>,
        dependents: Vec<String>,
    ) -> Self {
        Self {
            name,
            versions,
            dependencies,
            dependents,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn versions(&self) -> &[String] {
        &self.versions
    }

    /// Packages this package requires (outgoing edges), sorted
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Packages that require this package (incoming edges), sorted
    pub fn dependents(&self) -> &[String] {
        &self.dependents
    }

    #[cfg(test)]
    pub(crate) fn depends_on(&self, name: &str) -> bool {
        self.dependencies.iter().any(|d| d == name)
    }
}
