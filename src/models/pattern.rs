use crate::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three families the catalog groups its patterns into.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternCategory {
    /// How objects get created.
    #[serde(rename = "creational")]
    Creational,
    /// How objects are composed into larger structures.
    #[serde(rename = "structural")]
    Structural,
    /// How objects communicate and share responsibility.
    #[serde(rename = "behavioral")]
    Behavioral,
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Creational => write!(f, "creational"),
            Self::Structural => write!(f, "structural"),
            Self::Behavioral => write!(f, "behavioral"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub enum Pattern {
    Singleton,
    Factory,
    Adapter,
    Decorator,
    Observer,
    Command,
}

impl Pattern {
    /// Every pattern, in catalog order.
    pub const ALL: [Pattern; 6] = [
        Pattern::Singleton,
        Pattern::Factory,
        Pattern::Adapter,
        Pattern::Decorator,
        Pattern::Observer,
        Pattern::Command,
    ];

    pub fn category(&self) -> PatternCategory {
        match self {
            Self::Singleton | Self::Factory => PatternCategory::Creational,
            Self::Adapter | Self::Decorator => PatternCategory::Structural,
            Self::Observer | Self::Command => PatternCategory::Behavioral,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Singleton => "singleton",
            Self::Factory => "factory",
            Self::Adapter => "adapter",
            Self::Decorator => "decorator",
            Self::Observer => "observer",
            Self::Command => "command",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<&str> for Pattern {
    type Error = CatalogError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|pattern| pattern.name() == normalized)
            .ok_or_else(|| {
                CatalogError::invalid_argument(format!("Unknown pattern: '{}'", value))
            })
    }
}

impl TryFrom<String> for Pattern {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Pattern::try_from("Observer").unwrap(), Pattern::Observer);
        assert_eq!(Pattern::try_from(" COMMAND ").unwrap(), Pattern::Command);
    }

    #[test]
    fn test_unknown_pattern() {
        let err = Pattern::try_from("visitor").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_categories() {
        let creational: Vec<_> = Pattern::ALL
            .into_iter()
            .filter(|p| p.category() == PatternCategory::Creational)
            .collect();
        assert_eq!(creational, vec![Pattern::Singleton, Pattern::Factory]);
        assert_eq!(Pattern::Decorator.category(), PatternCategory::Structural);
        assert_eq!(Pattern::Command.category(), PatternCategory::Behavioral);
    }
}
