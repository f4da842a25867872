use crate::inventory::domain::PackageRecord;

/// InventoryResponse - Internal response DTO from the inventory use case
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryResponse {
    /// Installed packages in listing order
    pub packages: Vec<PackageRecord>,
    /// Non-empty listing lines that were not installed entries
    pub skipped_lines: usize,
    /// False when the listing lacked the dpkg table header (non-strict mode only)
    pub format_recognized: bool,
}

impl InventoryResponse {
    pub fn new(packages: Vec<PackageRecord>, skipped_lines: usize, format_recognized: bool) -> Self {
        Self {
            packages,
            skipped_lines,
            format_recognized,
        }
    }
}
