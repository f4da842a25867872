use crate::adapters::outbound::formatters::JsonFormatter;
use crate::application::dto::OutputFormat;
use crate::ports::outbound::InventoryFormatter;

/// Factory for creating inventory formatters
///
/// Keeps the mapping from [`OutputFormat`] to a concrete adapter out of the CLI.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use dpkg_probe::application::dto::OutputFormat;
    /// use dpkg_probe::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// assert_eq!(formatter.format(&[]).unwrap(), r#"{"result":[]}"#);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn InventoryFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::JsonPretty => Box::new(JsonFormatter::pretty()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Writing JSON inventory to stdout...",
            OutputFormat::JsonPretty => "📝 Writing pretty-printed JSON inventory to stdout...",
        }
    }
}
