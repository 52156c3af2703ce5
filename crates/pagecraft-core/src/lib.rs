//! # Pagecraft Core
//!
//! Shared error types and constants for the Pagecraft composition engine.

pub mod constants;
pub mod error;

pub use error::{DesignerError, Result};
