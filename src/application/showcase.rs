use crate::{
    Adaptee, CatalogConfig, CatalogError, LightOffCommand, LightOnCommand, NamedObserver,
    OutputSink, Pattern, Singleton, Target,
    factories::{BeverageFactory, ProductFactory},
    services::{Adapter, RemoteControl, Subject},
};
use std::sync::Arc;

/// Runs the catalog's demonstrations against one output sink.
///
/// Each pattern is demonstrated in isolation; nothing built for one
/// pattern is reused by another.
pub struct Showcase {
    config: CatalogConfig,
    output: Arc<dyn OutputSink>,
}

impl Showcase {
    pub fn new(config: CatalogConfig, output: Arc<dyn OutputSink>) -> Self {
        Self { config, output }
    }

    /// Returns true when the configuration asks for verbose logging.
    pub fn is_verbose(&self) -> bool {
        self.config.verbose
    }

    /// Runs every enabled pattern in catalog order, stopping at the first
    /// failure.
    pub fn run(&self) -> Result<(), CatalogError> {
        for pattern in Pattern::ALL {
            if self.config.is_enabled(pattern) {
                self.run_pattern(pattern)?;
            }
        }
        Ok(())
    }

    pub fn run_pattern(&self, pattern: Pattern) -> Result<(), CatalogError> {
        tracing::info!(%pattern, category = %pattern.category(), "running demonstration");
        self.output
            .write_line(&format!("== {} ({}) ==", pattern, pattern.category()))?;

        match pattern {
            Pattern::Singleton => self.singleton(),
            Pattern::Factory => self.factory(),
            Pattern::Adapter => self.adapter(),
            Pattern::Decorator => self.decorator(),
            Pattern::Observer => self.observer(),
            Pattern::Command => self.command(),
        }
    }

    fn singleton(&self) -> Result<(), CatalogError> {
        let first = Singleton::instance();
        let second = Singleton::instance();
        self.output.write_line(&format!(
            "Singleton {} (same instance: {})",
            first.id(),
            std::ptr::eq(first, second)
        ))
    }

    fn factory(&self) -> Result<(), CatalogError> {
        for kind in &self.config.products {
            let product = ProductFactory::create_product(kind)?;
            self.output.write_line(product.name())?;
        }
        Ok(())
    }

    fn adapter(&self) -> Result<(), CatalogError> {
        let target: Box<dyn Target> =
            Box::new(Adapter::new(Adaptee::new(self.output.clone())));
        target.request()
    }

    fn decorator(&self) -> Result<(), CatalogError> {
        let beverage = BeverageFactory::create(&self.config.additions)?;
        self.output.write_line(&beverage.description())
    }

    fn observer(&self) -> Result<(), CatalogError> {
        let mut subject = Subject::new();
        for name in &self.config.observers {
            subject.attach(Arc::new(NamedObserver::new(
                name.as_str(),
                self.output.clone(),
            )));
        }
        subject.notify(&self.config.message)
    }

    fn command(&self) -> Result<(), CatalogError> {
        let mut remote = RemoteControl::new();
        remote.set_command(LightOnCommand::new(self.output.clone()));
        remote.press_button()?;
        remote.set_command(LightOffCommand::new(self.output.clone()));
        remote.press_button()
    }
}
