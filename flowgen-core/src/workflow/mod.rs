//! Model output handling: sanitize, persist, report

pub mod graph;
pub mod record;
pub mod sanitize;
pub mod storage;

pub use graph::WorkflowSummary;
pub use record::{ExecutionItem, GenerationRecord, OutputBatches};
pub use sanitize::{parse_model_output, strip_code_fences};
pub use storage::{SaveOutcome, WorkflowStore, workflow_file_name};
