use crate::inventory::domain::PackagePattern;
use crate::shared::Result;

/// InventoryRequest - Internal request DTO for the inventory use case
///
/// Where the pattern came from (flag, `PT_package`, config file) is
/// resolved before the request is built; the use case only sees the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryRequest {
    /// Optional dpkg name/glob; `None` lists every package
    pub package_pattern: Option<PackagePattern>,
    /// Whether an unrecognized listing header is fatal
    pub strict_format: bool,
}

impl InventoryRequest {
    pub fn new(package_pattern: Option<PackagePattern>, strict_format: bool) -> Self {
        Self {
            package_pattern,
            strict_format,
        }
    }

    pub fn builder() -> InventoryRequestBuilder {
        InventoryRequestBuilder::default()
    }
}

/// Builder taking the raw, unvalidated pattern text
#[derive(Debug, Default)]
pub struct InventoryRequestBuilder {
    package: Option<String>,
    strict_format: bool,
}

impl InventoryRequestBuilder {
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn package_opt(mut self, package: Option<String>) -> Self {
        self.package = package;
        self
    }

    pub fn strict_format(mut self, strict_format: bool) -> Self {
        self.strict_format = strict_format;
        self
    }

    /// Validates the pattern and builds the request
    ///
    /// # Errors
    /// Returns an error if the pattern is rejected by [`PackagePattern::new`]
    pub fn build(self) -> Result<InventoryRequest> {
        Ok(InventoryRequest {
            package_pattern: PackagePattern::from_optional(self.package)?,
            strict_format: self.strict_format,
        })
    }
}
