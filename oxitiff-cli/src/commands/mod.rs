//! Command implementations for OxiTIFF CLI.

pub mod inspect;

pub use inspect::{InspectOptions, cmd_inspect};
