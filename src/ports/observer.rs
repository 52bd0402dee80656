use crate::CatalogError;

pub trait Observer: Send + Sync {
    /// Receives one notification. An error stops delivery to the
    /// observers registered after this one.
    fn update(&self, message: &str) -> Result<(), CatalogError>;
}
