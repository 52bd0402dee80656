// src/ports/mod.rs

pub use beverage::Beverage;
pub use command::Command;
pub use observer::Observer;
pub use output::OutputSink;
pub use product::Product;
pub use target::Target;

pub mod beverage;
pub mod command;
pub mod observer;
pub mod output;
pub mod product;
pub mod target;
