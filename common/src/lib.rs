pub mod config;
pub mod log;
pub mod err;
pub mod pretty_util;
