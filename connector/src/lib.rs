pub mod options;
pub mod config;

pub use options::offset_options::{MySQLOffsetOptions, MySQLOffsetOptionsBuilder};
