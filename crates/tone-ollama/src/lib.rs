//! Ollama integration for the email tone checker
//!
//! This crate provides the Ollama implementation of the TextGenerator trait.

mod client;
mod config;


pub use client::OllamaClient;
pub use config::OllamaConfig;

// Re-export core types for convenience
pub use tone_core::{Error, ModelReply, Result, TextGenerator};
