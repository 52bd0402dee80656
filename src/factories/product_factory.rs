// src/factories/product_factory.rs

use crate::{CatalogError, ConcreteProductA, ConcreteProductB, Product, ProductKind};

/// Factory for creating products from a string discriminator.
///
/// New products are added by extending [`ProductKind`] and the match in
/// [`ProductFactory::create`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductFactory;

impl ProductFactory {
    /// Creates the product named by `kind`.
    ///
    /// # Arguments
    /// * `kind` - Discriminator, `"A"` or `"B"` (case-sensitive)
    ///
    /// # Returns
    /// * `Ok(Box<dyn Product>)` - The matching concrete product
    /// * `Err(CatalogError::InvalidArgument)` - Unrecognized discriminator
    ///
    /// # Examples
    /// ```
    /// use pattern_catalog::factories::ProductFactory;
    ///
    /// let product = ProductFactory::create_product("A").unwrap();
    /// assert_eq!(product.name(), "Product A");
    /// assert!(ProductFactory::create_product("C").is_err());
    /// ```
    pub fn create_product(kind: &str) -> Result<Box<dyn Product>, CatalogError> {
        let kind = ProductKind::try_from(kind)?;
        Ok(Self::create(kind))
    }

    /// Creates the product for an already-parsed kind.
    pub fn create(kind: ProductKind) -> Box<dyn Product> {
        tracing::debug!(%kind, "creating product");
        match kind {
            ProductKind::A => Box::new(ConcreteProductA),
            ProductKind::B => Box::new(ConcreteProductB),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("A", "Product A")]
    #[case("B", "Product B")]
    fn test_create_known_product(#[case] kind: &str, #[case] expected: &str) {
        let product = ProductFactory::create_product(kind).unwrap();
        assert_eq!(product.name(), expected);
    }

    #[rstest]
    #[case("C")]
    #[case("a")]
    #[case("")]
    #[case("AB")]
    fn test_invalid_discriminator(#[case] kind: &str) {
        let result = ProductFactory::create_product(kind);
        assert!(matches!(result, Err(CatalogError::InvalidArgument(_))));
    }

    #[test]
    fn test_invalid_discriminator_message() {
        let err = ProductFactory::create_product("C").err().unwrap();
        assert_eq!(err.to_string(), "Invalid argument: Invalid Type: C");
    }

    #[test]
    fn test_create_from_kind() {
        assert_eq!(ProductFactory::create(ProductKind::B).name(), "Product B");
    }
}
