//! Schema module - Configuration and request types for animation merging.

mod config;
mod request;

pub use config::*;
pub use request::*;
