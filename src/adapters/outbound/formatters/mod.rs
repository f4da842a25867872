/// Formatter adapters for the inventory document
mod json_formatter;

pub use json_formatter::JsonFormatter;
