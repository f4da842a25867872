//! dpkg-probe - installed-package probe for Debian hosts
//!
//! This library runs `dpkg -l`, keeps the fully installed (`ii`) entries and
//! renders them as a `{"result": [...]}` JSON document, following the
//! hexagonal layout below.
//!
//! # Architecture
//!
//! - **Domain Layer** (`inventory`): package records, the package pattern and the listing parser
//! - **Application Layer** (`application`): the inventory use case, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): dpkg subprocess, JSON formatter, console I/O
//! - **Shared** (`shared`): Common error types and security checks
//!
//! # Example
//!
//! ```no_run
//! use dpkg_probe::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = CollectInventoryUseCase::new(DpkgDatabase::new(), StderrProgressReporter::new());
//!
//! let request = InventoryRequest::builder().package("bash").build()?;
//! let response = use_case.execute(request)?;
//!
//! let output = JsonFormatter::new().format(&response.packages)?;
//! StdoutPresenter::new().present(&output)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod inventory;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
    pub use crate::adapters::outbound::dpkg::{DpkgDatabase, DEFAULT_DPKG_PROGRAM};
    pub use crate::adapters::outbound::formatters::JsonFormatter;
    pub use crate::application::dto::{InventoryRequest, InventoryResponse, OutputFormat};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::use_cases::CollectInventoryUseCase;
    pub use crate::inventory::domain::{PackagePattern, PackageRecord};
    pub use crate::inventory::services::{
        ListingFormat, ListingFormatCheck, ListingParser, ParsedListing,
    };
    pub use crate::ports::outbound::{
        InventoryFormatter, OutputPresenter, PackageDatabase, ProgressReporter,
    };
    pub use crate::shared::error::{ExitCode, ProbeError};
    pub use crate::shared::Result;
}
