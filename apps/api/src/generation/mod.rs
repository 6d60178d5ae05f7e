// AI Provider Gateway: task-typed generation for the student dashboard.
// Implements: region profiles, prompt building, provider invocation,
// response normalization and deterministic fallback.
// All provider calls go through llm_client; handlers only call `Gateway::generate`.

pub mod fallback;
pub mod gateway;
pub mod handlers;
pub mod normalizer;
pub mod prompt_builder;
pub mod prompts;
pub mod region;
pub mod task;
