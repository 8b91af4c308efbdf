//! Completion API dispatch and reply extraction.

pub mod client;
pub mod extract;
pub mod prompt;

// Re-export main types for convenience
pub use client::{ChatCompletionResponse, CompletionClient};
