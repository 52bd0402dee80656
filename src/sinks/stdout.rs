use crate::{CatalogError, OutputSink};
use std::io::Write;

/// Writes each line to the process's standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&self, line: &str) -> Result<(), CatalogError> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        Ok(())
    }
}
