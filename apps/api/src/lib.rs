//! Deliverable generation service.
//!
//! Turns user-supplied business context (free text, uploaded documents) into
//! a single prompt, forwards it to an external completion service, and
//! returns the generated text. Shared by the `api` and `cli` binaries.

pub mod config;
pub mod errors;
pub mod extract;
pub mod generation;
pub mod llm_client;
pub mod routes;
pub mod state;
pub mod updates;
