use crate::inventory::domain::PackageRecord;
use crate::shared::error::ProbeError;
use crate::shared::Result;

/// Status marker dpkg prints for packages that are selected for install
/// and fully installed
pub const INSTALLED_MARKER: &str = "ii";

/// Positional fields of an installed line: marker, name, version, architecture
const REQUIRED_FIELDS: usize = 4;

/// Result of parsing a dpkg listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedListing {
    /// Installed packages in the order they appeared in the listing
    pub records: Vec<PackageRecord>,
    /// Non-empty lines that were not installed entries (headers, rc, un, ...)
    pub skipped_lines: usize,
}

/// ListingParser - turns `dpkg -l` text into package records
///
/// Only lines starting with [`INSTALLED_MARKER`] produce records. Everything
/// else is counted and dropped. An installed line that is too short to hold
/// a name, version and architecture aborts the whole parse.
pub struct ListingParser;

impl ListingParser {
    pub fn parse(output: &str) -> Result<ParsedListing> {
        let mut parsed = ParsedListing::default();

        for (index, line) in output.split('\n').enumerate() {
            if line.is_empty() {
                continue;
            }

            if !line.starts_with(INSTALLED_MARKER) {
                parsed.skipped_lines += 1;
                continue;
            }

            parsed.records.push(Self::parse_installed_line(index + 1, line)?);
        }

        Ok(parsed)
    }

    fn parse_installed_line(line_number: usize, line: &str) -> Result<PackageRecord> {
        let fields: Vec<&str> = line.split_whitespace().collect();

        if fields.len() < REQUIRED_FIELDS {
            return Err(ProbeError::MalformedListingLine {
                line_number,
                line: line.trim_end().to_string(),
                field_count: fields.len(),
            }
            .into());
        }

        Ok(PackageRecord::new(fields[1], fields[2], fields[3]))
    }
}
