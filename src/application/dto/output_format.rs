/// Output format enumeration for impact reports
///
/// Shared by the CLI (which parses it) and the formatter factory (which
/// dispatches on it), so it lives in the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain-text report (default)
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
    /// Human-readable Markdown
    Markdown,
    /// SVG rendering of the focus graph
    Svg,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "svg" => Ok(OutputFormat::Svg),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text', 'json', 'markdown' or 'svg'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Svg => write!(f, "svg"),
        }
    }
}
