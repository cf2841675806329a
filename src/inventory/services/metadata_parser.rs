use crate::inventory::domain::{Ecosystem, PackageRecord};
use crate::shared::Result;

const NAME_KEY: &str = "Name";
const VERSION_KEY: &str = "Version";

/// Name and version found in a METADATA header block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedMetadata {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// MetadataParser for core metadata files (`METADATA`)
///
/// Only the header block is read: it ends at the first blank line, after
/// which the long description begins and may contain anything, including
/// lines that look like `Name: ...`.
pub struct MetadataParser;

impl MetadataParser {
    /// Extracts `Name` and `Version` from the header block
    ///
    /// Unknown keys, continuation lines and lines without a `:` separator
    /// are skipped. The first occurrence of a key wins.
    pub fn parse_headers(content: &str) -> ParsedMetadata {
        let mut parsed = ParsedMetadata::default();
        let mut in_headers = false;

        for line in content.lines() {
            let line = line.trim_end_matches('\r');

            if line.trim().is_empty() {
                if in_headers {
                    break;
                }
                continue;
            }
            in_headers = true;

            // Folded header continuation
            if line.starts_with(' ') || line.starts_with('\t') {
                continue;
            }

            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim();
            if value.is_empty() {
                continue;
            }

            let key = key.trim();
            if key.eq_ignore_ascii_case(NAME_KEY) && parsed.name.is_none() {
                parsed.name = Some(value.to_string());
            } else if key.eq_ignore_ascii_case(VERSION_KEY) && parsed.version.is_none() {
                parsed.version = Some(value.to_string());
            }

            if parsed.name.is_some() && parsed.version.is_some() {
                break;
            }
        }

        parsed
    }

    /// Parses METADATA content into a record
    ///
    /// # Errors
    /// Returns an error if `Name` or `Version` is missing or fails validation
    pub fn parse(content: &str, ecosystem: &Ecosystem) -> Result<PackageRecord> {
        let parsed = Self::parse_headers(content);

        let name = parsed
            .name
            .ok_or_else(|| anyhow::anyhow!("'{}' header not found", NAME_KEY))?;
        let version = parsed
            .version
            .ok_or_else(|| anyhow::anyhow!("'{}' header not found", VERSION_KEY))?;

        PackageRecord::new(name, version, ecosystem.clone())
    }
}
