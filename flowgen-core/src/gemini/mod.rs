//! Gemini API client
//!
//! HTTP client configuration lives in `client`, wire types in `models`.

pub mod client;
pub mod models;

pub use client::{Client, ClientConfig};
pub use models::{Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part};
