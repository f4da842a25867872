/// Type alias for Result with anyhow::Error as the error type.
/// Every fallible operation in the probe returns this alias.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
