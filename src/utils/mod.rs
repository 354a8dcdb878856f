//! Shared utilities

mod logger;

pub use logger::init_logger;
