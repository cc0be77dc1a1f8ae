//! Option set and destination handling

pub mod destination;
pub mod options;

pub use destination::resolve_destination;
pub use options::{OptionValue, Options};
