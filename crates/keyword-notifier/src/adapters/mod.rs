//! In-process adapter implementations of the ports

mod in_memory;

pub use in_memory::*;
