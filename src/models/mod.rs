pub mod config;
pub mod pattern;

pub use config::*;
pub use pattern::*;
