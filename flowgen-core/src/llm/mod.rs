//! # LLM integration layer
//!
//! [`provider::TextGenerator`] is the seam between the workflow generator and
//! a hosted model. The only production implementation is
//! [`providers::GeminiProvider`].

pub mod provider;
pub mod providers;

pub use provider::{LLMError, TextGenerator};
pub use providers::GeminiProvider;
