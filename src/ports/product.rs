/// A product built by the product factory.
pub trait Product: Send + Sync {
    fn name(&self) -> &str;
}
