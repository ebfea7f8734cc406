use dep_impact::prelude::*;
use std::path::Path;

/// Mock InputReader serving in-memory manifest and lockfile text
pub struct MockInputReader {
    manifest: String,
    lockfile: Option<String>,
}

impl MockInputReader {
    pub fn new(manifest: &str, lockfile: &str) -> Self {
        Self {
            manifest: manifest.to_string(),
            lockfile: Some(lockfile.to_string()),
        }
    }

    /// A reader whose lockfile is missing
    pub fn without_lockfile(manifest: &str) -> Self {
        Self {
            manifest: manifest.to_string(),
            lockfile: None,
        }
    }
}

impl InputReader for MockInputReader {
    fn read_manifest(&self, _path: &Path) -> Result<String> {
        Ok(self.manifest.clone())
    }

    fn read_lockfile(&self, path: &Path) -> Result<String> {
        self.lockfile.clone().ok_or_else(|| {
            DepImpactError::LockfileNotFound {
                path: path.to_path_buf(),
                suggestion: "Run `npm install` to generate it.".to_string(),
            }
            .into()
        })
    }
}
