//! Deliverable generation: prompt assembly and completion orchestration.

pub mod builder;
pub mod generator;
pub mod handlers;
pub mod prompts;
