use crate::CatalogError;

/// Destination for the text lines the catalog's components produce.
pub trait OutputSink: Send + Sync {
    fn write_line(&self, line: &str) -> Result<(), CatalogError>;
}
