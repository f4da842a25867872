use crate::inventory::domain::PackageRecord;
use crate::shared::Result;

/// InventoryFormatter port for rendering package records
///
/// Implementations produce the complete document written to stdout, so
/// every implementation must emit the `{"result": [...]}` envelope.
pub trait InventoryFormatter {
    /// Formats the records, keeping their order
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, records: &[PackageRecord]) -> Result<String>;
}
