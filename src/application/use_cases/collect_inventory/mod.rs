use crate::application::dto::{InventoryRequest, InventoryResponse};
use crate::inventory::services::{ListingFormat, ListingFormatCheck, ListingParser};
use crate::ports::outbound::{PackageDatabase, ProgressReporter};
use crate::shared::error::ProbeError;
use crate::shared::Result;

/// CollectInventoryUseCase - Core use case for the package probe
///
/// Runs one listing, checks its format, and parses it into records.
/// Nothing is retried and nothing is partially returned: any failure
/// aborts the run before output is produced.
///
/// # Type Parameters
/// * `DB` - PackageDatabase implementation
/// * `PR` - ProgressReporter implementation
pub struct CollectInventoryUseCase<DB, PR> {
    package_database: DB,
    progress_reporter: PR,
}

impl<DB, PR> CollectInventoryUseCase<DB, PR>
where
    DB: PackageDatabase,
    PR: ProgressReporter,
{
    /// Creates a new CollectInventoryUseCase with injected dependencies
    pub fn new(package_database: DB, progress_reporter: PR) -> Self {
        Self {
            package_database,
            progress_reporter,
        }
    }

    /// Executes the inventory use case
    ///
    /// # Returns
    /// InventoryResponse holding the installed packages in listing order
    ///
    /// # Errors
    /// Returns an error if:
    /// - The listing command cannot be run or fails
    /// - Strict format checking is on and the listing header is unrecognized
    /// - An installed line is malformed
    pub fn execute(&self, request: InventoryRequest) -> Result<InventoryResponse> {
        let pattern = request.package_pattern.as_ref();

        // Step 1: Query the package database
        match pattern {
            Some(pattern) => self.progress_reporter.report(&format!(
                "🔎 Querying installed packages matching '{}'",
                pattern
            )),
            None => self
                .progress_reporter
                .report("🔎 Querying all installed packages"),
        }
        self.progress_reporter.report_waiting(&format!(
            "⏳ Running {}",
            self.package_database.describe(pattern)
        ));

        let listing = self.package_database.list_packages(pattern)?;

        // Step 2: Check the listing still looks like dpkg -l output
        let format = ListingFormatCheck::inspect(&listing);
        if let ListingFormat::Unrecognized { reason } = &format {
            if request.strict_format {
                return Err(ProbeError::UnrecognizedListingFormat {
                    details: reason.clone(),
                }
                .into());
            }
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Listing format not recognized ({}). Parsing anyway.",
                reason
            ));
        }

        // Step 3: Parse installed entries
        let parsed = ListingParser::parse(&listing)?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} installed package(s)",
            parsed.records.len()
        ));
        if parsed.skipped_lines > 0 {
            self.progress_reporter.report(&format!(
                "   - Skipped {} header or non-installed line(s)",
                parsed.skipped_lines
            ));
        }

        Ok(InventoryResponse::new(
            parsed.records,
            parsed.skipped_lines,
            format.is_recognized(),
        ))
    }
}
