// Module declarations for the library crate.

pub mod cli;
pub mod format;
pub mod parse;
pub mod token;
pub mod unit;
pub mod value;

// Re-export the core entry points so callers do not need to know the module
// layout.
pub use format::format_duration;
pub use parse::{is_parseable, parse, parse_lenient, parse_or, ParseError};
pub use value::DurationValue;
