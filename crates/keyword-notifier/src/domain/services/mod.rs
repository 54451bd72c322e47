//! Domain Services
//!
//! Stateless logic operating on domain values.

mod matcher;
mod negation;

pub use matcher::*;
pub use negation::*;
