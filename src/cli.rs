use clap::Parser;
use dpkg_probe::prelude::{OutputFormat, Result, DEFAULT_DPKG_PROGRAM};
use std::path::PathBuf;

use crate::config::ConfigFile;

/// Environment variable the orchestration layer sets to scope the listing
pub const PACKAGE_ENV_VAR: &str = "PT_package";

/// List installed Debian packages as a JSON document
#[derive(Parser, Debug)]
#[command(name = "dpkg-probe")]
#[command(version)]
#[command(about = "List installed Debian packages as a JSON document", long_about = None)]
pub struct Args {
    /// Package name or dpkg glob to restrict the listing to (e.g. "lib*")
    #[arg(short, long, env = PACKAGE_ENV_VAR, value_name = "PATTERN")]
    pub package: Option<String>,

    /// Path to a config file (defaults to ./dpkg-probe.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Listing binary to run instead of dpkg
    #[arg(long = "dpkg", value_name = "PATH")]
    pub dpkg_command: Option<String>,

    /// Output format: json or json-pretty
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Fail when the listing does not carry the dpkg -l table header
    #[arg(long)]
    pub strict_format: bool,

    /// Suppress progress messages on stderr (warnings are still shown)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Merges the arguments with a config file.
    ///
    /// Command line (and `PT_package`) wins over the config file, which wins
    /// over the built-in defaults. A blank pattern counts as unset.
    pub fn into_settings(self, config: ConfigFile) -> Result<ProbeSettings> {
        let format = match (self.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(raw)) => raw
                .parse::<OutputFormat>()
                .map_err(|e| anyhow::anyhow!("{}\n\n💡 Hint: Check the 'format' key of the config file", e))?,
            (None, None) => OutputFormat::default(),
        };

        Ok(ProbeSettings {
            package: non_blank(self.package).or_else(|| non_blank(config.package)),
            dpkg_command: self
                .dpkg_command
                .or(config.dpkg_command)
                .unwrap_or_else(|| DEFAULT_DPKG_PROGRAM.to_string()),
            format,
            strict_format: self.strict_format || config.strict_format.unwrap_or(false),
            quiet: self.quiet || config.quiet.unwrap_or(false),
        })
    }
}

/// Effective settings for one probe run
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeSettings {
    pub package: Option<String>,
    pub dpkg_command: String,
    pub format: OutputFormat,
    pub strict_format: bool,
    pub quiet: bool,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
