use serde::Serialize;

/// ScanMetadata value object identifying one scan run
#[derive(Debug, Clone, Serialize)]
pub struct ScanMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    scan_id: String,
}

impl ScanMetadata {
    pub fn new(timestamp: String, tool_name: String, tool_version: String, scan_id: String) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            scan_id,
        }
    }

    /// Metadata for a scan starting now
    pub fn generate() -> Self {
        Self::new(
            chrono::Utc::now().to_rfc3339(),
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
            uuid::Uuid::new_v4().to_string(),
        )
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn scan_id(&self) -> &str {
        &self.scan_id
    }
}
