/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (package database, console, stdout).
pub mod formatter;
pub mod output_presenter;
pub mod package_database;
pub mod progress_reporter;

pub use formatter::InventoryFormatter;
pub use output_presenter::OutputPresenter;
pub use package_database::PackageDatabase;
pub use progress_reporter::ProgressReporter;
