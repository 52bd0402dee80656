use crate::{CatalogError, Product};
use std::fmt;

/// Discriminator selecting which concrete product the factory builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductKind {
    A,
    B,
}

impl ProductKind {
    pub const ALL: [ProductKind; 2] = [ProductKind::A, ProductKind::B];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProductKind {
    type Error = CatalogError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            _ => Err(CatalogError::invalid_argument(format!(
                "Invalid Type: {}",
                value
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteProductA;

impl Product for ConcreteProductA {
    fn name(&self) -> &str {
        "Product A"
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteProductB;

impl Product for ConcreteProductB {
    fn name(&self) -> &str {
        "Product B"
    }
}
