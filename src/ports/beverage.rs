pub trait Beverage: Send + Sync {
    fn description(&self) -> String;
}
