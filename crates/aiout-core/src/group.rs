//! Session grouping: the prompt and tool-input collectors.
//!
//! Both collectors are single-pass and order-preserving: entries within a
//! session accumulate in input order, repeated session ids accumulate, and
//! nothing is deduplicated.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::record::HookRecord;

/// Records grouped by session id.
pub type SessionGroups<T> = BTreeMap<String, Vec<T>>;

/// A prompt captured during a session.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PromptEntry {
    pub prompt: String,
    pub timestamp: String,
}

/// The interesting sub-fields of one tool invocation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ToolInputEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    /// Emitted even when the source record had no timestamp.
    pub timestamp: Option<String>,
}

/// Groups prompts by session.
///
/// A record contributes only if it carries a non-empty session id, a
/// non-empty prompt, and a non-empty timestamp; anything else is dropped.
pub fn collect_prompts(records: &[HookRecord]) -> SessionGroups<PromptEntry> {
    let mut sessions: SessionGroups<PromptEntry> = BTreeMap::new();

    for record in records {
        let Some(session_id) = record.session() else {
            continue;
        };
        let Some(prompt) = record.prompt.as_deref().filter(|p| !p.is_empty()) else {
            continue;
        };
        let Some(timestamp) = record.timestamp.as_deref().filter(|t| !t.is_empty()) else {
            continue;
        };

        sessions
            .entry(session_id.to_string())
            .or_default()
            .push(PromptEntry {
                prompt: prompt.to_string(),
                timestamp: timestamp.to_string(),
            });
    }

    sessions
}

/// Groups tool inputs by session.
///
/// Only the `prompt`, `query`, and `content` sub-fields are lifted out of
/// `tool_input`; the rest of the payload is deliberately left behind. Records
/// whose `tool_input` is not an object, or carries none of the three, are
/// dropped.
pub fn collect_tool_inputs(records: &[HookRecord]) -> SessionGroups<ToolInputEntry> {
    let mut sessions: SessionGroups<ToolInputEntry> = BTreeMap::new();

    for record in records {
        let Some(session_id) = record.session() else {
            continue;
        };
        let Some(tool_input) = record.tool_input.as_ref().and_then(Value::as_object) else {
            continue;
        };

        let entry = ToolInputEntry {
            prompt: tool_input.get("prompt").cloned(),
            query: tool_input.get("query").cloned(),
            content: tool_input.get("content").cloned(),
            timestamp: record.timestamp.clone(),
        };
        if entry.prompt.is_none() && entry.query.is_none() && entry.content.is_none() {
            continue;
        }

        sessions
            .entry(session_id.to_string())
            .or_default()
            .push(entry);
    }

    sessions
}
