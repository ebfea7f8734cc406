/// Result alias for the application, adapter and CLI layers.
///
/// The pure analysis core returns `std::result::Result<_, AnalysisError>` instead,
/// so callers can match on the rejection kind.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
