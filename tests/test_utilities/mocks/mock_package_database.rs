use std::cell::RefCell;
use dpkg_probe::prelude::*;

/// Mock PackageDatabase returning canned listing text
pub struct MockPackageDatabase {
    pub listing: String,
    pub should_fail: bool,
    pub requested_patterns: RefCell<Vec<Option<String>>>,
}

impl MockPackageDatabase {
    pub fn new(listing: &str) -> Self {
        Self {
            listing: listing.to_string(),
            should_fail: false,
            requested_patterns: RefCell::new(Vec::new()),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            listing: String::new(),
            should_fail: true,
            requested_patterns: RefCell::new(Vec::new()),
        }
    }
}

impl PackageDatabase for MockPackageDatabase {
    fn list_packages(&self, pattern: Option<&PackagePattern>) -> Result<String> {
        self.requested_patterns
            .borrow_mut()
            .push(pattern.map(|p| p.as_str().to_string()));

        if self.should_fail {
            return Err(ProbeError::ListingCommandFailed {
                command: self.describe(pattern),
                exit_code: Some(2),
                stderr: "dpkg: error: mock failure".to_string(),
            }
            .into());
        }
        Ok(self.listing.clone())
    }

    fn describe(&self, pattern: Option<&PackagePattern>) -> String {
        match pattern {
            Some(pattern) => format!("mock-dpkg -l {}", pattern),
            None => "mock-dpkg -l".to_string(),
        }
    }
}
