pub mod error;
pub mod request;
pub mod response;

pub use error::{ApiErrorBody, ApiErrorResponse};
pub use request::{Content, GenerateContentRequest, Part};
pub use response::{Candidate, GenerateContentResponse, PromptFeedback};
