//! Prompt assembly: pure string building, no I/O and no service calls.
//!
//! Two modes exist and are modeled as one tagged type (`BuiltPrompt`):
//! the detailed multi-field mode used by the HTTP API, and the
//! conversational mode used by the interactive variant. Which one applies
//! is decided by the caller; the generator consumes either.

use serde::Deserialize;

use crate::generation::prompts::{CONVERSATIONAL_SYSTEM, PROMPT_SEPARATOR, SYSTEM_INSTRUCTION};
use crate::llm_client::Message;
use crate::updates::ProjectUpdate;

/// Incoming generation request. Every field is optional; absent, empty, and
/// whitespace-only are equivalent. Endpoint policy decides which fields are
/// required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub extracted_text: String,
    #[serde(default)]
    pub business_problem: String,
    #[serde(default)]
    pub tech_stack: String,
    #[serde(default)]
    pub time_constraint: String,
    #[serde(default)]
    pub resource_constraints: String,
}

impl GenerationRequest {
    /// True when no field carries content after trimming.
    pub fn is_empty(&self) -> bool {
        [
            &self.prompt,
            &self.extracted_text,
            &self.business_problem,
            &self.tech_stack,
            &self.time_constraint,
            &self.resource_constraints,
        ]
        .iter()
        .all(|field| field.trim().is_empty())
    }
}

/// A fully assembled prompt, ready for the completion service.
#[derive(Debug, Clone, PartialEq)]
pub enum BuiltPrompt {
    /// One user message: preamble + separator + labeled non-empty fields.
    Detailed(String),
    /// A system/user message pair for the interactive variant.
    Conversational { system: String, user: String },
}

impl BuiltPrompt {
    /// The user-role content, the part that must be non-empty for a
    /// generation call to proceed.
    pub fn user_content(&self) -> &str {
        match self {
            BuiltPrompt::Detailed(prompt) => prompt,
            BuiltPrompt::Conversational { user, .. } => user,
        }
    }

    /// The ordered message sequence sent to the completion service:
    /// at most two messages, system (if any) first.
    pub fn messages(&self) -> Vec<Message> {
        match self {
            BuiltPrompt::Detailed(prompt) => vec![Message::user(prompt)],
            BuiltPrompt::Conversational { system, user } => {
                vec![Message::system(system), Message::user(user)]
            }
        }
    }
}

/// Labeled sections of the detailed prompt, in their fixed render order.
const SECTION_LABELS: [&str; 6] = [
    "Business Problem/Requirement",
    "Tech Stack",
    "Time Constraint",
    "Resource Constraints",
    "Additional Instructions or Prompts",
    "Extracted File Content",
];

/// Builds the detailed multi-field prompt.
///
/// Only non-empty fields are rendered, each as `"{label}:\n{value}\n"`, in
/// the fixed section order. There is no placeholder text for absent fields,
/// so omission is observable in the output.
pub fn build_detailed(request: &GenerationRequest) -> BuiltPrompt {
    let sections = [
        &request.business_problem,
        &request.tech_stack,
        &request.time_constraint,
        &request.resource_constraints,
        &request.prompt,
        &request.extracted_text,
    ];

    let mut prompt = String::from(SYSTEM_INSTRUCTION);
    prompt.push_str(PROMPT_SEPARATOR);

    for (label, value) in SECTION_LABELS.iter().zip(sections) {
        let value = value.trim();
        if !value.is_empty() {
            prompt.push_str(label);
            prompt.push_str(":\n");
            prompt.push_str(value);
            prompt.push('\n');
        }
    }

    BuiltPrompt::Detailed(prompt)
}

/// Builds the conversational prompt pair for the interactive variant:
/// the fixed persona system message plus a user message combining the
/// free-form request with the internal-update bullet list.
pub fn build_conversational(request: &str, updates: &[ProjectUpdate]) -> BuiltPrompt {
    BuiltPrompt::Conversational {
        system: CONVERSATIONAL_SYSTEM.to_string(),
        user: format!(
            "{}\n\nLatest internal project updates:\n{}",
            request.trim(),
            format_updates(updates)
        ),
    }
}

/// Renders updates as `"- {title} ({status})"` bullets, newline-joined,
/// preserving source order.
pub fn format_updates(updates: &[ProjectUpdate]) -> String {
    updates
        .iter()
        .map(|update| format!("- {} ({})", update.title, update.status))
        .collect::<Vec<_>>()
        .join("\n")
}
