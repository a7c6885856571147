//! Test helpers module
//!
//! Mock Telegram server and builders for Telegram updates and services.
#![allow(dead_code)]

pub mod telegram_mock;
pub mod test_data;

pub use telegram_mock::*;
pub use test_data::*;
