/// dpkg adapter running the listing tool as a subprocess
mod dpkg_database;

pub use dpkg_database::{DpkgDatabase, DEFAULT_DPKG_PROGRAM};
