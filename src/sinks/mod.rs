// src/sinks/mod.rs

mod memory;
mod stdout;

pub use memory::MemorySink;
pub use stdout::StdoutSink;
