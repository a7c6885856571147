//! Utility modules
//!
//! This module contains common utilities used throughout the application,
//! including error handling, logging setup, markup helpers and input validators.

pub mod errors;
pub mod logging;
pub mod helpers;
pub mod validators;

pub use errors::{TravelBotError, NotifyError, Result};
pub use helpers::OutputFormat;
