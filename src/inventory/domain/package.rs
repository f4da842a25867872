/// PackageRecord value object describing one installed package
///
/// Records are built by the listing parser from a single qualifying line
/// and never change afterwards. Two records are equal when their name,
/// version and architecture are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageRecord {
    name: String,
    version: String,
    architecture: String,
}

impl PackageRecord {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        architecture: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            architecture: architecture.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn architecture(&self) -> &str {
        &self.architecture
    }
}

impl std::fmt::Display for PackageRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.name, self.version, self.architecture)
    }
}
