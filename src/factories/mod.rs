// src/factories/mod.rs

//! Factories own the decision of which concrete type to build, so callers
//! only ever see the capability traits.

mod beverage_factory;
mod product_factory;

pub use beverage_factory::BeverageFactory;
pub use product_factory::ProductFactory;
