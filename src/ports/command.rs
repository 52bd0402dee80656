use crate::CatalogError;

pub trait Command: Send + Sync {
    fn execute(&self) -> Result<(), CatalogError>;
}
