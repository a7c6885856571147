//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod hotel;
pub mod request;
pub mod user;

// Re-export commonly used models
pub use hotel::{hotel_menu, resolve_hotel_choice, HOTEL_TIERS};
pub use request::{TravelRequest, NO_CHILDREN};
pub use user::UserInfo;
