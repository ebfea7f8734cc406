use crate::dependency_analysis::domain::LayoutOptions;
use crate::shared::error::DepImpactError;
use crate::shared::Result;
use std::path::PathBuf;

/// AnalysisRequest - Internal request DTO for the analyze-dependencies use case
///
/// Built through [`AnalysisRequest::builder`], which validates the layout limits.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Path to package.json
    pub manifest_path: PathBuf,
    /// Path to package-lock.json
    pub lockfile_path: PathBuf,
    /// Package to inspect; defaults to the first direct dependency
    pub package: Option<String>,
    /// Direct dependency whose removal is previewed; defaults to the first one
    pub remove: Option<String>,
    /// Free-text package search
    pub search: Option<String>,
    /// Depth and node cap for the focus layout
    pub layout: LayoutOptions,
}

impl AnalysisRequest {
    pub fn builder() -> AnalysisRequestBuilder {
        AnalysisRequestBuilder::default()
    }
}

/// Builder for [`AnalysisRequest`]
#[derive(Debug, Default)]
pub struct AnalysisRequestBuilder {
    manifest_path: Option<PathBuf>,
    lockfile_path: Option<PathBuf>,
    package: Option<String>,
    remove: Option<String>,
    search: Option<String>,
    depth: Option<usize>,
    max_nodes: Option<usize>,
}

impl AnalysisRequestBuilder {
    pub fn manifest_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_path = Some(path.into());
        self
    }

    pub fn lockfile_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.lockfile_path = Some(path.into());
        self
    }

    pub fn package(mut self, package: Option<String>) -> Self {
        self.package = non_blank(package);
        self
    }

    pub fn remove(mut self, remove: Option<String>) -> Self {
        self.remove = non_blank(remove);
        self
    }

    pub fn search(mut self, search: Option<String>) -> Self {
        self.search = search;
        self
    }

    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    /// Validates and builds the request
    ///
    /// # Errors
    /// Returns `DepImpactError::Validation` when a path is missing or a
    /// layout limit is out of range
    pub fn build(self) -> Result<AnalysisRequest> {
        let manifest_path = self.manifest_path.ok_or_else(|| DepImpactError::Validation {
            message: "manifest path is required".to_string(),
        })?;
        let lockfile_path = self.lockfile_path.ok_or_else(|| DepImpactError::Validation {
            message: "lockfile path is required".to_string(),
        })?;

        let depth = self.depth.unwrap_or(LayoutOptions::DEFAULT_DEPTH);
        if !(LayoutOptions::MIN_DEPTH..=LayoutOptions::MAX_DEPTH).contains(&depth) {
            return Err(DepImpactError::Validation {
                message: format!(
                    "depth must be between {} and {}, got {}",
                    LayoutOptions::MIN_DEPTH,
                    LayoutOptions::MAX_DEPTH,
                    depth
                ),
            }
            .into());
        }

        let max_nodes = self.max_nodes.unwrap_or(LayoutOptions::DEFAULT_MAX_NODES);
        if !(LayoutOptions::MIN_MAX_NODES..=LayoutOptions::MAX_MAX_NODES).contains(&max_nodes) {
            return Err(DepImpactError::Validation {
                message: format!(
                    "max nodes must be between {} and {}, got {}",
                    LayoutOptions::MIN_MAX_NODES,
                    LayoutOptions::MAX_MAX_NODES,
                    max_nodes
                ),
            }
            .into());
        }

        Ok(AnalysisRequest {
            manifest_path,
            lockfile_path,
            package: self.package,
            remove: self.remove,
            search: self.search,
            layout: LayoutOptions::new(depth, max_nodes),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> AnalysisRequestBuilder {
        AnalysisRequest::builder()
            .manifest_path("package.json")
            .lockfile_path("package-lock.json")
    }

    #[test]
    fn test_build_with_defaults() {
        let request = base().build().unwrap();

        assert_eq!(request.manifest_path, PathBuf::from("package.json"));
        assert_eq!(request.lockfile_path, PathBuf::from("package-lock.json"));
        assert_eq!(request.layout, LayoutOptions::default());
        assert!(request.package.is_none());
        assert!(request.remove.is_none());
        assert!(request.search.is_none());
    }

    #[test]
    fn test_build_with_all_fields() {
        let request = base()
            .package(Some("react".to_string()))
            .remove(Some("lodash".to_string()))
            .search(Some("re".to_string()))
            .depth(5)
            .max_nodes(400)
            .build()
            .unwrap();

        assert_eq!(request.package.as_deref(), Some("react"));
        assert_eq!(request.remove.as_deref(), Some("lodash"));
        assert_eq!(request.search.as_deref(), Some("re"));
        assert_eq!(request.layout, LayoutOptions::new(5, 400));
    }

    #[test]
    fn test_blank_names_are_dropped() {
        let request = base()
            .package(Some("   ".to_string()))
            .remove(Some(" lodash ".to_string()))
            .build()
            .unwrap();

        assert!(request.package.is_none());
        assert_eq!(request.remove.as_deref(), Some("lodash"));
    }

    #[test]
    fn test_depth_out_of_range() {
        for depth in [0, 6] {
            let err = base().depth(depth).build().unwrap_err();
            assert!(err.to_string().contains("depth must be between 1 and 5"));
        }
    }

    #[test]
    fn test_max_nodes_out_of_range() {
        for max_nodes in [24, 401] {
            let err = base().max_nodes(max_nodes).build().unwrap_err();
            assert!(err.to_string().contains("max nodes must be between 25 and 400"));
        }
    }

    #[test]
    fn test_missing_paths() {
        let err = AnalysisRequest::builder()
            .lockfile_path("package-lock.json")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("manifest path is required"));

        let err = AnalysisRequest::builder()
            .manifest_path("package.json")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("lockfile path is required"));
    }
}
