//! Prompt templates sent to the model

pub mod workflow;

pub use workflow::{OUTPUT_MARKER, compose_workflow_prompt};
