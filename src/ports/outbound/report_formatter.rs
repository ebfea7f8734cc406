use crate::application::read_models::ImpactReadModel;
use crate::shared::Result;

/// ReportFormatter port for rendering an impact report
///
/// Implementations exist for plain text, JSON, Markdown, and SVG.
pub trait ReportFormatter {
    /// Formats the report
    ///
    /// # Arguments
    /// * `model` - Read model carrying graph summary, inspected package,
    ///   removal preview, and layout
    ///
    /// # Returns
    /// Formatted report content as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &ImpactReadModel) -> Result<String>;
}
