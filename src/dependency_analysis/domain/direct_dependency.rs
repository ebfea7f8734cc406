use serde::Serialize;
use std::fmt;

/// Manifest section a direct dependency was declared in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DependencySection {
    Dependencies,
    DevDependencies,
    OptionalDependencies,
    PeerDependencies,
}

impl DependencySection {
    /// All recognized sections, in the order they are read from the manifest
    pub const ALL: [DependencySection; 4] = [
        DependencySection::Dependencies,
        DependencySection::DevDependencies,
        DependencySection::OptionalDependencies,
        DependencySection::PeerDependencies,
    ];

    /// Top-level manifest key holding this section
    pub fn manifest_key(self) -> &'static str {
        match self {
            DependencySection::Dependencies => "dependencies",
            DependencySection::DevDependencies => "devDependencies",
            DependencySection::OptionalDependencies => "optionalDependencies",
            DependencySection::PeerDependencies => "peerDependencies",
        }
    }
}

impl fmt::Display for DependencySection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.manifest_key())
    }
}

/// A requirement declared directly in the manifest
///
/// The same package may be declared in several sections; each declaration
/// is kept as its own record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectDependency {
    name: String,
    range: String,
    section: DependencySection,
}

impl DirectDependency {
    pub fn new(name: impl Into<String>, range: impl Into<String>, section: DependencySection) -> Self {
        Self {
            name: name.into(),
            range: range.into(),
            section,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared semver range, kept verbatim (empty when the manifest value was not a string)
    pub fn range(&self) -> &str {
        &self.range
    }

    pub fn section(&self) -> DependencySection {
        self.section
    }
}
