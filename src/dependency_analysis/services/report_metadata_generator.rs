use crate::dependency_analysis::domain::ReportMetadata;
use chrono::Utc;

pub const TOOL_NAME: &str = "dep-impact";

/// ReportMetadataGenerator service stamping reports with run information
pub struct ReportMetadataGenerator;

impl ReportMetadataGenerator {
    /// Metadata for the running binary, stamped with the current UTC time
    pub fn generate_metadata() -> ReportMetadata {
        ReportMetadata::new(Utc::now(), TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }
}
