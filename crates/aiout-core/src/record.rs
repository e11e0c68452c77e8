//! Typed hook event records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One event captured from a coding assistant's hook system.
///
/// Hooks emit free-form JSON; the fields the toolchain itself consults are
/// typed here and every other producer key round-trips through `extra`
/// untouched. Parsing accepts any JSON object: a known field carrying an
/// unexpected type is left in `extra` instead of failing the record, so a
/// type surprise degrades one field rather than losing the payload.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HookRecord {
    /// Event label injected at capture time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_event_type: Option<String>,
    /// ISO-8601 capture time, injected at capture time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Opaque key correlating records from one interactive session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// User prompt text, when the hook carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Raw tool input payload; its shape depends on the tool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_input: Option<Value>,
    /// Producer-specific fields preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HookRecord {
    /// Returns the session id if present and non-empty.
    #[must_use]
    pub fn session(&self) -> Option<&str> {
        self.session_id.as_deref().filter(|s| !s.is_empty())
    }
}

/// Removes `key` from the map only when its value is a string; wrong-typed
/// values stay behind so no producer data is lost.
fn take_string(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    if matches!(map.get(key), Some(Value::String(_))) {
        if let Some(Value::String(s)) = map.remove(key) {
            return Some(s);
        }
    }
    None
}

impl<'de> Deserialize<'de> for HookRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let mut map = Map::deserialize(deserializer)?;

        let debug_event_type = take_string(&mut map, "debug_event_type");
        let timestamp = take_string(&mut map, "timestamp");
        let session_id = take_string(&mut map, "session_id");
        let prompt = take_string(&mut map, "prompt");
        let tool_input = map.remove("tool_input");

        Ok(Self {
            debug_event_type,
            timestamp,
            session_id,
            prompt,
            tool_input,
            extra: map,
        })
    }
}
