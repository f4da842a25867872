use std::fmt;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let the orchestration layer tell a broken listing tool
/// apart from an unexpected listing format or a local misconfiguration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the JSON document was written to stdout
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// The listing command could not be started or exited non-zero
    ListingFailed = 3,
    /// The listing output could not be parsed
    MalformedListing = 4,
    /// Any other application error (config file, invalid pattern, I/O error, etc.)
    ApplicationError = 5,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error by looking for a `ProbeError` in its chain
    pub fn for_error(error: &anyhow::Error) -> Self {
        let probe_error = error
            .chain()
            .find_map(|cause| cause.downcast_ref::<ProbeError>());

        match probe_error {
            Some(ProbeError::ListingCommandUnavailable { .. })
            | Some(ProbeError::ListingCommandFailed { .. }) => ExitCode::ListingFailed,
            Some(ProbeError::MalformedListingLine { .. })
            | Some(ProbeError::UnrecognizedListingFormat { .. }) => ExitCode::MalformedListing,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ListingFailed => write!(f, "Listing Failed (3)"),
            ExitCode::MalformedListing => write!(f, "Malformed Listing (4)"),
            ExitCode::ApplicationError => write!(f, "Application Error (5)"),
        }
    }
}

/// Application-specific errors for the package probe.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Package listing command could not be started: {command}\nDetails: {details}\n\n💡 Hint: Verify that dpkg is installed and on PATH, or pass its location with --dpkg")]
    ListingCommandUnavailable { command: String, details: String },

    #[error("Package listing command failed: {command} (exit status: {})\n{}\n\n💡 Hint: {}", describe_exit(.exit_code), describe_stderr(.stderr), failure_hint(.stderr))]
    ListingCommandFailed {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("Malformed package listing at line {line_number}: expected at least 4 fields, found {field_count}\nLine: {line}\n\n💡 Hint: Installed entries must read 'ii <name> <version> <architecture> [description]'")]
    MalformedListingLine {
        line_number: usize,
        line: String,
        field_count: usize,
    },

    #[error("Unrecognized package listing format: {details}\n\n💡 Hint: The listing did not carry the dpkg -l table header. Drop --strict-format to accept it anyway")]
    UnrecognizedListingFormat { details: String },

    #[error("Invalid package pattern: '{pattern}'\nReason: {reason}\n\n💡 Hint: Pass a package name or a dpkg glob such as 'lib*'")]
    InvalidPackagePattern { pattern: String, reason: String },

    #[error("Failed to write output\nDetails: {details}")]
    OutputWriteError { details: String },
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => code.to_string(),
        None => "terminated by signal".to_string(),
    }
}

fn describe_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        "Details: (no error output)".to_string()
    } else {
        format!("Details: {}", trimmed)
    }
}

fn failure_hint(stderr: &str) -> &'static str {
    if stderr.contains("no packages found matching") {
        "No installed package matches the requested pattern"
    } else {
        "Run the same dpkg command manually to inspect the failure"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ListingFailed.as_i32(), 3);
        assert_eq!(ExitCode::MalformedListing.as_i32(), 4);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 5);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::ListingFailed), "Listing Failed (3)");
        assert_eq!(
            format!("{}", ExitCode::MalformedListing),
            "Malformed Listing (4)"
        );
    }

    #[test]
    fn test_exit_code_for_listing_failure() {
        let error: anyhow::Error = ProbeError::ListingCommandFailed {
            command: "dpkg -l".to_string(),
            exit_code: Some(2),
            stderr: String::new(),
        }
        .into();
        assert_eq!(ExitCode::for_error(&error), ExitCode::ListingFailed);
    }

    #[test]
    fn test_exit_code_for_malformed_line_with_context() {
        let error = anyhow::Error::from(ProbeError::MalformedListingLine {
            line_number: 3,
            line: "ii broken".to_string(),
            field_count: 2,
        })
        .context("Failed to collect inventory");
        assert_eq!(ExitCode::for_error(&error), ExitCode::MalformedListing);
    }

    #[test]
    fn test_exit_code_for_other_error() {
        let error = anyhow::anyhow!("something else");
        assert_eq!(ExitCode::for_error(&error), ExitCode::ApplicationError);
    }

    #[test]
    fn test_listing_command_unavailable_display() {
        let error = ProbeError::ListingCommandUnavailable {
            command: "dpkg -l".to_string(),
            details: "No such file or directory".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("could not be started"));
        assert!(display.contains("dpkg -l"));
        assert!(display.contains("No such file or directory"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_listing_command_failed_display_no_match() {
        let error = ProbeError::ListingCommandFailed {
            command: "dpkg -l nosuchpkg".to_string(),
            exit_code: Some(1),
            stderr: "dpkg-query: no packages found matching nosuchpkg\n".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("exit status: 1"));
        assert!(display.contains("no packages found matching nosuchpkg"));
        assert!(display.contains("No installed package matches"));
    }

    #[test]
    fn test_listing_command_failed_display_signal() {
        let error = ProbeError::ListingCommandFailed {
            command: "dpkg -l".to_string(),
            exit_code: None,
            stderr: "   ".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("terminated by signal"));
        assert!(display.contains("(no error output)"));
    }

    #[test]
    fn test_malformed_listing_line_display() {
        let error = ProbeError::MalformedListingLine {
            line_number: 7,
            line: "ii  bash".to_string(),
            field_count: 2,
        };
        let display = format!("{}", error);
        assert!(display.contains("line 7"));
        assert!(display.contains("found 2"));
        assert!(display.contains("ii  bash"));
    }

    #[test]
    fn test_invalid_package_pattern_display() {
        let error = ProbeError::InvalidPackagePattern {
            pattern: "--purge".to_string(),
            reason: "must not start with '-'".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid package pattern"));
        assert!(display.contains("--purge"));
        assert!(display.contains("must not start with '-'"));
    }
}
