use crate::ports::outbound::OutputPresenter;
use crate::shared::error::ProbeError;
use crate::shared::Result;
use std::io::{self, Write};

/// StdoutPresenter adapter for writing output to stdout
///
/// This adapter implements the OutputPresenter port. The document is
/// written in one go, followed by a newline, and stdout is flushed.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }

    fn write_document(writer: &mut impl Write, content: &str) -> io::Result<()> {
        writer.write_all(content.as_bytes())?;
        if !content.ends_with('\n') {
            writer.write_all(b"\n")?;
        }
        writer.flush()
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        Self::write_document(&mut handle, content).map_err(|e| ProbeError::OutputWriteError {
            details: format!("Failed to write to stdout: {}", e),
        })?;
        Ok(())
    }
}
