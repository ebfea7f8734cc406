use chrono::{DateTime, SecondsFormat, Utc};

/// When and by which build a report was produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMetadata {
    generated_at: DateTime<Utc>,
    tool_name: &'static str,
    tool_version: &'static str,
}

impl ReportMetadata {
    pub fn new(generated_at: DateTime<Utc>, tool_name: &'static str, tool_version: &'static str) -> Self {
        Self {
            generated_at,
            tool_name,
            tool_version,
        }
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// RFC 3339 with a `Z` suffix and whole seconds
    pub fn timestamp(&self) -> String {
        self.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    pub fn tool_name(&self) -> &str {
        self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        self.tool_version
    }
}
