use crate::{CatalogError, Command, OutputSink};
use std::sync::Arc;

pub struct LightOnCommand {
    output: Arc<dyn OutputSink>,
}

impl LightOnCommand {
    pub fn new(output: Arc<dyn OutputSink>) -> Self {
        Self { output }
    }
}

impl Command for LightOnCommand {
    fn execute(&self) -> Result<(), CatalogError> {
        self.output.write_line("Light is on")
    }
}

pub struct LightOffCommand {
    output: Arc<dyn OutputSink>,
}

impl LightOffCommand {
    pub fn new(output: Arc<dyn OutputSink>) -> Self {
        Self { output }
    }
}

impl Command for LightOffCommand {
    fn execute(&self) -> Result<(), CatalogError> {
        self.output.write_line("Light is off")
    }
}
