use crate::{CatalogError, Observer, OutputSink};
use std::sync::Arc;

/// An observer that reports every message it receives under its name.
#[derive(Clone)]
pub struct NamedObserver {
    name: String,
    output: Arc<dyn OutputSink>,
}

impl NamedObserver {
    pub fn new<S: Into<String>>(name: S, output: Arc<dyn OutputSink>) -> Self {
        Self {
            name: name.into(),
            output,
        }
    }

    /// Returns the observer name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Observer for NamedObserver {
    fn update(&self, message: &str) -> Result<(), CatalogError> {
        self.output
            .write_line(&format!("{} received: {}", self.name, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;

    #[test]
    fn test_update_reports_name_and_message() {
        let sink = Arc::new(MemorySink::new());
        let observer = NamedObserver::new("Observer 1", sink.clone());

        observer.update("hello").unwrap();

        assert_eq!(observer.name(), "Observer 1");
        assert_eq!(sink.lines(), vec!["Observer 1 received: hello"]);
    }
}
