use crate::{CatalogError, OutputSink};
use std::sync::Arc;

/// A component whose interface does not match [`crate::Target`].
#[derive(Clone)]
pub struct Adaptee {
    output: Arc<dyn OutputSink>,
}

impl Adaptee {
    pub fn new(output: Arc<dyn OutputSink>) -> Self {
        Self { output }
    }

    pub fn specific_request(&self) -> Result<(), CatalogError> {
        self.output.write_line("Specific Request")
    }
}
