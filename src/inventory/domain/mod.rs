pub mod package;
pub mod package_pattern;

pub use package::PackageRecord;
pub use package_pattern::PackagePattern;
