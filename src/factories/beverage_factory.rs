// src/factories/beverage_factory.rs

use crate::{Addition, Beverage, CatalogError, Coffee};

/// Factory for assembling decorator chains around a [`Coffee`] base.
#[derive(Debug, Clone, Copy, Default)]
pub struct BeverageFactory;

impl BeverageFactory {
    /// Builds a coffee wrapped in `additions`, innermost first.
    ///
    /// # Arguments
    /// * `additions` - Addition names, applied in order (e.g. `["milk", "milk"]`)
    ///
    /// # Returns
    /// * `Ok(Box<dyn Beverage>)` - The assembled chain
    /// * `Err(CatalogError::InvalidArgument)` - An addition name is unknown
    pub fn create<S: AsRef<str>>(additions: &[S]) -> Result<Box<dyn Beverage>, CatalogError> {
        let additions = additions
            .iter()
            .map(|name| Addition::try_from(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::with_additions(&additions))
    }

    /// Builds a coffee wrapped in already-parsed additions.
    pub fn with_additions(additions: &[Addition]) -> Box<dyn Beverage> {
        tracing::debug!(depth = additions.len(), "assembling beverage");
        additions
            .iter()
            .fold(Box::new(Coffee) as Box<dyn Beverage>, |beverage, addition| {
                addition.decorate(beverage)
            })
    }
}
