//! ABA Core Library
//!
//! Domain models, configuration and the analyze client for the
//! AI Business Analyst.

pub mod analyze;
pub mod config;
pub mod error;

pub use error::{AbaError, AbaResult};
