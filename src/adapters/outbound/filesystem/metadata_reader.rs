use crate::inventory::domain::{Ecosystem, PackageRecord};
use crate::inventory::services::MetadataParser;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_METADATA_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// MetadataFileReader adapter for reading `METADATA` files
///
/// Reads with a size limit and hands the content to [`MetadataParser`].
#[derive(Debug, Clone)]
pub struct MetadataFileReader {
    max_file_size: u64,
}

impl MetadataFileReader {
    pub fn new() -> Self {
        Self {
            max_file_size: MAX_METADATA_FILE_SIZE,
        }
    }

    pub fn with_max_file_size(max_file_size: u64) -> Self {
        Self { max_file_size }
    }

    /// Safely read a METADATA file:
    /// - Require a regular file
    /// - Check the size limit before and after reading
    ///
    /// Invalid UTF-8 is replaced rather than rejected; only the ASCII header
    /// block is ever parsed.
    pub fn read_to_string(&self, path: &Path) -> Result<String> {
        let file_size = validate_regular_file(path, "METADATA file")?;
        validate_file_size(file_size, path, self.max_file_size)?;

        let bytes = fs::read(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;

        // The file may have grown since it was stat'ed
        validate_file_size(bytes.len() as u64, path, self.max_file_size)?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Reads and parses a METADATA file into a record
    pub fn read_record(&self, path: &Path, ecosystem: &Ecosystem) -> Result<PackageRecord> {
        let content = self.read_to_string(path)?;
        MetadataParser::parse(&content, ecosystem)
    }
}

impl Default for MetadataFileReader {
    fn default() -> Self {
        Self::new()
    }
}
