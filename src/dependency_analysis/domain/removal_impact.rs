use serde::Serialize;

/// What happens to the reachable package set when one direct dependency is dropped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovalImpact {
    target: String,
    removed: Vec<String>,
    retained: Vec<String>,
}

impl RemovalImpact {
    pub(crate) fn new(target: String, removed: Vec<String>, retained: Vec<String>) -> Self {
        Self {
            target,
            removed,
            retained,
        }
    }

    /// The direct dependency whose removal was previewed
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Packages that would no longer be reachable from any remaining root, sorted
    pub fn removed(&self) -> &[String] {
        &self.removed
    }

    /// Packages still reachable from the remaining roots, sorted
    pub fn retained(&self) -> &[String] {
        &self.retained
    }

    pub fn is_removed(&self, name: &str) -> bool {
        self.removed.iter().any(|n| n == name)
    }

    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }
}
