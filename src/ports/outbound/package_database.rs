use crate::inventory::domain::PackagePattern;
use crate::shared::Result;

/// PackageDatabase port for querying the host's package database
///
/// This port abstracts the listing tool so the use case can be driven
/// by a real `dpkg` subprocess or by canned output in tests.
pub trait PackageDatabase {
    /// Lists packages known to the package database
    ///
    /// # Arguments
    /// * `pattern` - Optional name or glob restricting the listing; `None` lists everything
    ///
    /// # Returns
    /// The raw, line-oriented listing text exactly as the tool printed it
    ///
    /// # Errors
    /// Returns an error if:
    /// - The listing tool cannot be started
    /// - The listing tool exits with a non-zero status (including "no packages found")
    fn list_packages(&self, pattern: Option<&PackagePattern>) -> Result<String>;

    /// Human-readable description of the command that would run, used in progress messages
    fn describe(&self, pattern: Option<&PackagePattern>) -> String;
}

impl<T: PackageDatabase + ?Sized> PackageDatabase for &T {
    fn list_packages(&self, pattern: Option<&PackagePattern>) -> Result<String> {
        (**self).list_packages(pattern)
    }

    fn describe(&self, pattern: Option<&PackagePattern>) -> String {
        (**self).describe(pattern)
    }
}
