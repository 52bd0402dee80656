use crate::{Beverage, CatalogError};
use std::fmt;

/// Base component of every decorator chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Coffee;

impl Beverage for Coffee {
    fn description(&self) -> String {
        "Coffee".to_string()
    }
}

/// Appends `Milk` to the description of the beverage it wraps.
///
/// The inner beverage is owned and fixed at construction, so a chain can
/// never contain a cycle.
pub struct MilkDecorator {
    beverage: Box<dyn Beverage>,
}

impl MilkDecorator {
    pub fn new(beverage: impl Beverage + 'static) -> Self {
        Self::wrap(Box::new(beverage))
    }

    pub fn wrap(beverage: Box<dyn Beverage>) -> Self {
        Self { beverage }
    }
}

impl Beverage for MilkDecorator {
    fn description(&self) -> String {
        self.beverage.description() + "Milk"
    }
}

/// Additions a beverage chain can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Addition {
    Milk,
}

impl Addition {
    /// Wraps `beverage` in the decorator for this addition.
    pub fn decorate(&self, beverage: Box<dyn Beverage>) -> Box<dyn Beverage> {
        match self {
            Self::Milk => Box::new(MilkDecorator::wrap(beverage)),
        }
    }
}

impl fmt::Display for Addition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Milk => write!(f, "milk"),
        }
    }
}

impl TryFrom<&str> for Addition {
    type Error = CatalogError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "milk" => Ok(Self::Milk),
            _ => Err(CatalogError::invalid_argument(format!(
                "Unknown beverage addition: '{}'",
                value
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coffee_description() {
        assert_eq!(Coffee.description(), "Coffee");
    }

    #[test]
    fn test_single_milk() {
        let beverage = MilkDecorator::new(Coffee);
        assert_eq!(beverage.description(), "CoffeeMilk");
    }

    #[test]
    fn test_double_milk_is_not_idempotent() {
        let once = MilkDecorator::new(Coffee);
        let twice = MilkDecorator::new(MilkDecorator::new(Coffee));

        assert_eq!(twice.description(), "CoffeeMilkMilk");
        assert_ne!(once.description(), twice.description());
    }

    #[test]
    fn test_deep_chain() {
        let mut beverage: Box<dyn Beverage> = Box::new(Coffee);
        for _ in 0..100 {
            beverage = Addition::Milk.decorate(beverage);
        }

        let description = beverage.description();
        assert!(description.starts_with("Coffee"));
        assert_eq!(description.matches("Milk").count(), 100);
    }

    #[test]
    fn test_addition_parsing() {
        assert_eq!(Addition::try_from("Milk").unwrap(), Addition::Milk);
        assert!(Addition::try_from("sugar").unwrap_err().is_invalid_argument());
    }
}
