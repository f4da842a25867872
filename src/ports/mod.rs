/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist: the probe has a single entry point,
/// the CLI, which calls the use case directly.
pub mod outbound;
