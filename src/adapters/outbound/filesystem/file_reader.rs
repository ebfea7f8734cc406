use crate::ports::outbound::InputReader;
use crate::shared::error::DepImpactError;
use crate::shared::security::read_input_file;
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for reading the manifest and lockfile
///
/// Every read goes through the shared file-safety checks: no symlinks,
/// regular files only, bounded size.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn read(&self, path: &Path, description: &str) -> Result<String> {
        tracing::debug!(path = %path.display(), description, "reading input file");

        Ok(read_input_file(path, description)?)
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl InputReader for FileSystemReader {
    fn read_manifest(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(DepImpactError::ManifestNotFound {
                path: path.to_path_buf(),
                suggestion: "Run in the root directory of an npm project, or specify the manifest with the --manifest option.".to_string(),
            }
            .into());
        }

        self.read(path, "package.json")
    }

    fn read_lockfile(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(DepImpactError::LockfileNotFound {
                path: path.to_path_buf(),
                suggestion: "Run `npm install` to generate package-lock.json, or specify the lockfile with the --lockfile option.".to_string(),
            }
            .into());
        }

        self.read(path, "lockfile")
    }
}
