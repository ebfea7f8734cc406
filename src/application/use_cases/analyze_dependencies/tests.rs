use super::*;
use crate::dependency_analysis::domain::{LayoutOptions, NodeRole};
use crate::shared::error::{AnalysisError, DepImpactError};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

// Mock implementations for testing
struct MockInputReader {
    manifest: Option<String>,
    lockfile: Option<String>,
}

impl MockInputReader {
    fn new(manifest: &str, lockfile: &str) -> Self {
        Self {
            manifest: Some(manifest.to_string()),
            lockfile: Some(lockfile.to_string()),
        }
    }
}

impl InputReader for MockInputReader {
    fn read_manifest(&self, path: &Path) -> Result<String> {
        self.manifest.clone().ok_or_else(|| {
            DepImpactError::ManifestNotFound {
                path: path.to_path_buf(),
                suggestion: "mock".to_string(),
            }
            .into()
        })
    }

    fn read_lockfile(&self, path: &Path) -> Result<String> {
        self.lockfile.clone().ok_or_else(|| {
            DepImpactError::LockfileNotFound {
                path: path.to_path_buf(),
                suggestion: "mock".to_string(),
            }
            .into()
        })
    }
}

#[derive(Default)]
struct MockProgressReporter {
    messages: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl ProgressReporter for &MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

const MANIFEST: &str = r#"{
    "dependencies": {"express": "^4.18.0", "lodash": "^4.17.21"},
    "devDependencies": {"jest": "^29.0.0"}
}"#;

const LOCKFILE: &str = r#"{
    "lockfileVersion": 3,
    "packages": {
        "": {"name": "app"},
        "node_modules/express": {"version": "4.18.2", "dependencies": {"body-parser": "1.20.1", "debug": "2.6.9"}},
        "node_modules/body-parser": {"version": "1.20.1", "dependencies": {"debug": "2.6.9"}},
        "node_modules/debug": {"version": "2.6.9", "dependencies": {"ms": "2.0.0"}},
        "node_modules/ms": {"version": "2.0.0"},
        "node_modules/lodash": {"version": "4.17.21"},
        "node_modules/jest": {"version": "29.7.0", "dependencies": {"ms": "2.1.3"}}
    }
}"#;

fn request() -> AnalysisRequest {
    AnalysisRequest::builder()
        .manifest_path("package.json")
        .lockfile_path("package-lock.json")
        .build()
        .unwrap()
}

#[test]
fn test_execute_with_defaults() {
    let reporter = MockProgressReporter::default();
    let use_case =
        AnalyzeDependenciesUseCase::new(MockInputReader::new(MANIFEST, LOCKFILE), &reporter);

    let response = use_case.execute(request()).unwrap();

    assert_eq!(response.graph.node_count(), 6);
    assert_eq!(response.selected.as_deref(), Some("express"));
    assert_eq!(response.remove_target.as_deref(), Some("express"));

    let impact = response.impact.unwrap();
    assert_eq!(impact.removed(), ["body-parser", "debug", "express"]);
    assert_eq!(impact.retained(), ["jest", "lodash", "ms"]);

    assert_eq!(response.layout.focus.as_deref(), Some("express"));
    assert_eq!(
        response.layout.node("express").unwrap().role,
        NodeRole::Focus
    );
    assert!(response.layout.node("debug").unwrap().removed);
    assert!(!response.layout.node("ms").unwrap().removed);
    assert!(response.search.is_none());
    assert_eq!(response.layout_options, LayoutOptions::default());

    let messages = reporter.messages.borrow();
    assert!(messages.iter().any(|m| m.contains("Loading manifest")));
    assert!(messages.iter().any(|m| m.contains("6 package(s), 5 edge(s)")));
    assert!(messages.iter().any(|m| m.contains("would drop 3 package(s)")));
    assert!(messages.iter().any(|m| m.contains("around 'express'")));
    assert!(reporter.errors.borrow().is_empty());
}

#[test]
fn test_execute_with_explicit_choices() {
    let reporter = MockProgressReporter::default();
    let use_case =
        AnalyzeDependenciesUseCase::new(MockInputReader::new(MANIFEST, LOCKFILE), &reporter);

    let request = AnalysisRequest::builder()
        .manifest_path("package.json")
        .lockfile_path("package-lock.json")
        .package(Some("debug".to_string()))
        .remove(Some("jest".to_string()))
        .search(Some("DE".to_string()))
        .depth(1)
        .build()
        .unwrap();

    let response = use_case.execute(request).unwrap();

    assert_eq!(response.selected.as_deref(), Some("debug"));
    assert_eq!(response.impact.unwrap().removed(), ["jest"]);
    assert_eq!(response.layout.focus.as_deref(), Some("debug"));
    assert_eq!(response.layout.node("ms").unwrap().level, 1);
    assert_eq!(response.layout.node("express").unwrap().level, -1);
    assert!(response.layout.node("lodash").is_none());

    let (query, matches) = response.search.unwrap();
    assert_eq!(query, "DE");
    assert_eq!(matches, vec!["debug"]);
}

#[test]
fn test_unknown_package_falls_back_to_removal_target_focus() {
    let reporter = MockProgressReporter::default();
    let use_case =
        AnalyzeDependenciesUseCase::new(MockInputReader::new(MANIFEST, LOCKFILE), &reporter);

    let request = AnalysisRequest::builder()
        .manifest_path("package.json")
        .lockfile_path("package-lock.json")
        .package(Some("react".to_string()))
        .remove(Some("lodash".to_string()))
        .build()
        .unwrap();

    let response = use_case.execute(request).unwrap();

    assert!(response.selected.is_none());
    assert_eq!(response.layout.focus.as_deref(), Some("lodash"));
    assert!(reporter.errors.borrow()[0].contains("'react' was not found"));
}

#[test]
fn test_non_direct_removal_target_only_warns() {
    let reporter = MockProgressReporter::default();
    let use_case =
        AnalyzeDependenciesUseCase::new(MockInputReader::new(MANIFEST, LOCKFILE), &reporter);

    let request = AnalysisRequest::builder()
        .manifest_path("package.json")
        .lockfile_path("package-lock.json")
        .remove(Some("ms".to_string()))
        .build()
        .unwrap();

    let response = use_case.execute(request).unwrap();

    assert!(response.impact.unwrap().removed().is_empty());
    assert!(reporter.errors.borrow()[0].contains("'ms' is not a direct dependency"));
}

#[test]
fn test_lockfile_only_graph_has_no_removal_preview() {
    let reporter = MockProgressReporter::default();
    let lockfile = r#"{"packages":{"node_modules/zeta":{},"node_modules/alpha":{"dependencies":{"zeta":"*"}}}}"#;
    let use_case =
        AnalyzeDependenciesUseCase::new(MockInputReader::new("{}", lockfile), &reporter);

    let response = use_case.execute(request()).unwrap();

    assert_eq!(response.selected.as_deref(), Some("alpha"));
    assert!(response.remove_target.is_none());
    assert!(response.impact.is_none());
    assert_eq!(response.layout.nodes.len(), 2);
}

#[test]
fn test_rejected_input_surfaces_analysis_error() {
    let reporter = MockProgressReporter::default();
    let use_case =
        AnalyzeDependenciesUseCase::new(MockInputReader::new("not json", "{}"), &reporter);

    let err = use_case.execute(request()).unwrap_err();

    let analysis_error = err.downcast_ref::<AnalysisError>().unwrap();
    assert!(analysis_error.to_string().starts_with("Invalid package.json: "));
}

#[test]
fn test_missing_lockfile_is_reported() {
    let reporter = MockProgressReporter::default();
    let reader = MockInputReader {
        manifest: Some(MANIFEST.to_string()),
        lockfile: None,
    };
    let use_case = AnalyzeDependenciesUseCase::new(reader, &reporter);

    let err = use_case.execute(request()).unwrap_err();

    match err.downcast_ref::<DepImpactError>() {
        Some(DepImpactError::LockfileNotFound { path, .. }) => {
            assert_eq!(path, &PathBuf::from("package-lock.json"))
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
