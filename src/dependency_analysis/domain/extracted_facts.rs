use super::DirectDependency;

/// A package described by the lockfile, with the version recorded for it (if any)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    pub name: String,
    pub version: Option<String>,
}

/// Raw observations pulled out of a manifest/lockfile pair
///
/// Produced by the input parser and consumed by the graph builder.
/// Names may repeat across records and edges; deduplication is the builder's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFacts {
    pub direct_dependencies: Vec<DirectDependency>,
    pub records: Vec<PackageRecord>,
    /// `(from, to)` pairs meaning "from requires to"
    pub edges: Vec<(String, String)>,
}

impl ExtractedFacts {
    pub fn record(&mut self, name: &str, version: Option<&str>) {
        self.records.push(PackageRecord {
            name: name.to_string(),
            version: version.map(str::to_string),
        });
    }

    /// Registers an edge; edges with an empty endpoint are dropped
    pub fn edge(&mut self, from: &str, to: &str) {
        if from.is_empty() || to.is_empty() {
            return;
        }
        self.edges.push((from.to_string(), to.to_string()));
    }

    /// Whether the lockfile contributed any package at all
    pub fn has_lockfile_packages(&self) -> bool {
        !self.records.is_empty() || !self.edges.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.direct_dependencies.is_empty() && !self.has_lockfile_packages()
    }
}
