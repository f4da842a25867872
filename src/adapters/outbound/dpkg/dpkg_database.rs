use crate::inventory::domain::PackagePattern;
use crate::ports::outbound::PackageDatabase;
use crate::shared::error::ProbeError;
use crate::shared::Result;
use std::ffi::OsString;
use std::process::{Command, Stdio};

/// Program used when no override is configured (resolved through PATH)
pub const DEFAULT_DPKG_PROGRAM: &str = "dpkg";

/// Flag asking dpkg for its package table
const LIST_FLAG: &str = "-l";

/// Wide enough that dpkg never truncates name, version or architecture
const LISTING_COLUMNS: &str = "1000";

/// DpkgDatabase adapter for querying the dpkg database
///
/// This adapter implements the PackageDatabase port by running
/// `dpkg -l [pattern]`. The pattern is passed as its own argument and no
/// shell is involved, so it is never interpreted.
pub struct DpkgDatabase {
    program: OsString,
}

impl DpkgDatabase {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_DPKG_PROGRAM)
    }

    /// Uses another listing binary, e.g. an absolute path to dpkg
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn build_command(&self, pattern: Option<&PackagePattern>) -> Command {
        let mut command = Command::new(&self.program);
        command.arg(LIST_FLAG);
        if let Some(pattern) = pattern {
            command.arg(pattern.as_str());
        }

        // Untranslated header and status legend, untruncated columns
        command
            .env("LC_ALL", "C")
            .env("COLUMNS", LISTING_COLUMNS)
            .stdin(Stdio::null());
        command
    }
}

impl Default for DpkgDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageDatabase for DpkgDatabase {
    fn list_packages(&self, pattern: Option<&PackagePattern>) -> Result<String> {
        let output = self
            .build_command(pattern)
            .output()
            .map_err(|e| ProbeError::ListingCommandUnavailable {
                command: self.describe(pattern),
                details: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ProbeError::ListingCommandFailed {
                command: self.describe(pattern),
                exit_code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }
            .into());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn describe(&self, pattern: Option<&PackagePattern>) -> String {
        let program = self.program.to_string_lossy();
        match pattern {
            Some(pattern) => format!("{} {} {}", program, LIST_FLAG, pattern),
            None => format!("{} {}", program, LIST_FLAG),
        }
    }
}
