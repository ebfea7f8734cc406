use crate::shared::Result;
use std::path::Path;

/// InputReader port for loading the manifest and lockfile text
///
/// The analysis core only ever sees strings; this port is where they come from.
pub trait InputReader {
    /// Reads a package.json file
    ///
    /// # Arguments
    /// * `path` - Location of the manifest
    ///
    /// # Returns
    /// The raw manifest text
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The file fails a safety check or cannot be read
    fn read_manifest(&self, path: &Path) -> Result<String>;

    /// Reads a package-lock.json file
    ///
    /// # Errors
    /// Same conditions as [`InputReader::read_manifest`]
    fn read_lockfile(&self, path: &Path) -> Result<String>;
}
