use crate::{Adaptee, CatalogError, Target};

/// Exposes an owned [`Adaptee`] through the [`Target`] interface without
/// modifying it.
#[derive(Clone)]
pub struct Adapter {
    adaptee: Adaptee,
}

impl Adapter {
    pub fn new(adaptee: Adaptee) -> Self {
        Self { adaptee }
    }
}

impl Target for Adapter {
    fn request(&self) -> Result<(), CatalogError> {
        self.adaptee.specific_request()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;
    use std::sync::Arc;

    #[test]
    fn test_request_matches_specific_request() {
        let direct = Arc::new(MemorySink::new());
        Adaptee::new(direct.clone()).specific_request().unwrap();

        let adapted = Arc::new(MemorySink::new());
        let target: Box<dyn Target> = Box::new(Adapter::new(Adaptee::new(adapted.clone())));
        target.request().unwrap();

        assert_eq!(adapted.lines(), direct.lines());
        assert_eq!(adapted.lines(), vec!["Specific Request"]);
    }

    #[test]
    fn test_every_request_delegates() {
        let sink = Arc::new(MemorySink::new());
        let adapter = Adapter::new(Adaptee::new(sink.clone()));

        adapter.request().unwrap();
        adapter.request().unwrap();

        assert_eq!(sink.lines().len(), 2);
    }
}
