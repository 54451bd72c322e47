//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod keyword_list;
mod match_result;
mod scope_filter;
mod settings_field;

pub use keyword_list::*;
pub use match_result::*;
pub use scope_filter::*;
pub use settings_field::*;
