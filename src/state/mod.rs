//! State management module
//!
//! This module handles questionnaire sessions and the conversation flow

pub mod conversation;
pub mod steps;
pub mod storage;

// Re-export commonly used state components
pub use conversation::{ConversationEngine, Outcome, Reply};
pub use steps::{Step, TOTAL_STEPS};
pub use storage::{InMemorySessionStore, Session, SessionStore};
