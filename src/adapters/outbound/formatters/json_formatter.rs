use crate::inventory::domain::PackageRecord;
use crate::ports::outbound::InventoryFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Envelope<'a> {
    result: Vec<Entry<'a>>,
}

#[derive(Debug, Serialize)]
struct Entry<'a> {
    name: &'a str,
    version: &'a str,
    arch: &'a str,
}

/// JsonFormatter adapter for the `{"result": [...]}` envelope
///
/// This adapter implements the InventoryFormatter port. Compact output is
/// a single line; pretty output is indented for people reading it.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryFormatter for JsonFormatter {
    fn format(&self, records: &[PackageRecord]) -> Result<String> {
        let envelope = Envelope {
            result: records
                .iter()
                .map(|record| Entry {
                    name: record.name(),
                    version: record.version(),
                    arch: record.architecture(),
                })
                .collect(),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&envelope)?
        } else {
            serde_json::to_string(&envelope)?
        };
        Ok(json)
    }
}
