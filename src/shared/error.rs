use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts tell a rejected input pair apart from
/// argument mistakes and I/O failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Analysis completed and the report was written
    Success = 0,
    /// The manifest/lockfile pair was rejected (invalid JSON or no dependency data)
    InputRejected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O, config, validation, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error surfaced by the application layer
    pub fn for_error(error: &anyhow::Error) -> Self {
        if error.downcast_ref::<AnalysisError>().is_some() {
            ExitCode::InputRejected
        } else {
            ExitCode::ApplicationError
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InputRejected => write!(f, "Input Rejected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Which of the two analysis inputs an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Manifest,
    Lockfile,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Manifest => write!(f, "package.json"),
            InputKind::Lockfile => write!(f, "lockfile"),
        }
    }
}

/// Rejections produced by the analysis core.
///
/// These are returned as values; the graph builder, impact analyzer and
/// layout engine have no failure modes of their own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// One of the inputs is not valid JSON, or is JSON but not an object
    #[error("Invalid {input}: {details}")]
    Parse { input: InputKind, details: String },

    /// Both inputs parsed but neither carried dependency information
    #[error("No dependency data found in package.json / lockfile.")]
    NoData,
}

impl AnalysisError {
    /// The input that failed to parse, if this is a parse error
    pub fn input(&self) -> Option<InputKind> {
        match self {
            AnalysisError::Parse { input, .. } => Some(*input),
            AnalysisError::NoData => None,
        }
    }
}

/// Application-specific errors raised around the analysis core.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the user-facing wording next to each variant.
#[derive(Debug, Error)]
pub enum DepImpactError {
    #[error("package.json not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Lockfile not found: {path}\n\n💡 Hint: {suggestion}")]
    LockfileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for builder patterns and config values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
