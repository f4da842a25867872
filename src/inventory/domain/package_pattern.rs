use crate::shared::error::ProbeError;
use crate::shared::security::contains_control_characters;
use crate::shared::Result;

/// Maximum length for a package pattern (security limit)
const MAX_PATTERN_LENGTH: usize = 255;

/// NewType wrapper for the optional dpkg package filter
///
/// The pattern is handed to dpkg as a single argument, so shell
/// metacharacters are inert. dpkg glob characters (`*`, `?`, `[...]`) are
/// kept as they are since dpkg expands them itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackagePattern(String);

impl PackagePattern {
    pub fn new(pattern: String) -> Result<Self> {
        let trimmed = pattern.trim();

        if trimmed.is_empty() {
            return Err(invalid(&pattern, "Pattern cannot be empty"));
        }

        // Security: Length limit to prevent DoS
        if trimmed.len() > MAX_PATTERN_LENGTH {
            return Err(invalid(
                &pattern,
                &format!(
                    "Pattern is too long ({} bytes). Maximum allowed: {} bytes",
                    trimmed.len(),
                    MAX_PATTERN_LENGTH
                ),
            ));
        }

        // Security: dpkg would read a leading dash as an option (e.g. --purge)
        if trimmed.starts_with('-') {
            return Err(invalid(&pattern, "Pattern must not start with '-'"));
        }

        if contains_control_characters(trimmed) {
            return Err(invalid(&pattern, "Pattern contains control characters"));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Builds a pattern from an optional raw value, treating blank text as "no filter"
    pub fn from_optional(raw: Option<String>) -> Result<Option<Self>> {
        match raw {
            Some(value) if !value.trim().is_empty() => Self::new(value).map(Some),
            _ => Ok(None),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when the pattern holds a dpkg glob character
    pub fn is_glob(&self) -> bool {
        self.0.contains(['*', '?', '['])
    }
}

impl std::fmt::Display for PackagePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn invalid(pattern: &str, reason: &str) -> anyhow::Error {
    ProbeError::InvalidPackagePattern {
        pattern: pattern.escape_debug().to_string(),
        reason: reason.to_string(),
    }
    .into()
}
