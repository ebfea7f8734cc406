//! dep-impact - dependency graph explorer for npm projects
//!
//! Reads a `package.json` / `package-lock.json` pair, builds the resolved
//! dependency graph, previews what uninstalling a direct dependency would
//! prune, and lays out the neighborhood of a focus package for rendering.
//!
//! # Architecture
//!
//! - **Domain Layer** (`dependency_analysis`): graph model and pure analysis services
//! - **Application Layer** (`application`): use case, DTOs, read models, factories
//! - **Ports** (`ports`): interfaces for reading inputs and emitting output
//! - **Adapters** (`adapters`): filesystem, console, and report formatters
//! - **Shared** (`shared`): errors, result alias, file-safety checks
//!
//! # Example
//!
//! ```
//! use dep_impact::dependency_analysis::domain::LayoutOptions;
//! use dep_impact::dependency_analysis::services::{DependencyAnalyzer, ImpactAnalyzer, LayoutEngine};
//!
//! let manifest = r#"{"dependencies":{"a":"^1.0.0"}}"#;
//! let lockfile = r#"{"lockfileVersion":3,"packages":{
//!     "node_modules/a":{"version":"1.0.0","dependencies":{"b":"^1.0.0"}},
//!     "node_modules/b":{"version":"1.0.0"}}}"#;
//!
//! let graph = DependencyAnalyzer::analyze(manifest, lockfile).unwrap();
//! let impact = ImpactAnalyzer::preview_removal(&graph, "a");
//! assert_eq!(impact.removed(), ["a", "b"]);
//!
//! let layout = LayoutEngine::build(&graph, "a", LayoutOptions::default());
//! assert_eq!(layout.nodes.len(), 2);
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod dependency_analysis;
pub mod logging;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, SvgFormatter, TextFormatter,
    };
    pub use crate::application::dto::{AnalysisRequest, AnalysisResponse, OutputFormat};
    pub use crate::application::read_models::{ImpactReadModel, ImpactReadModelBuilder};
    pub use crate::application::use_cases::AnalyzeDependenciesUseCase;
    pub use crate::dependency_analysis::domain::{
        DependencyGraph, GraphLayout, LayoutOptions, PackageNode, RemovalImpact,
    };
    pub use crate::dependency_analysis::services::{
        DependencyAnalyzer, ImpactAnalyzer, LayoutEngine, PackageSearch,
    };
    pub use crate::ports::outbound::{
        InputReader, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::error::{AnalysisError, DepImpactError, ExitCode};
    pub use crate::shared::Result;
}
