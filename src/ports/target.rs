use crate::CatalogError;

/// The interface clients expect; the adapter makes the adaptee satisfy it.
pub trait Target: Send + Sync {
    fn request(&self) -> Result<(), CatalogError>;
}
