//! Deterministic case export: canonical JSON with sorted keys.
//!
//! The contract is byte-identical output for equal values, regardless of
//! how the underlying maps were built — object keys are sorted
//! lexicographically at every nesting level and arrays keep their order.

use serde_json::Value;

use privacydesk_core::errors::DeskResult;
use privacydesk_core::request::PrivacyRequest;

/// Render a JSON value canonically with two-space indentation.
pub fn canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0);
    out
}

/// Serialize a case for file download or print rendering.
pub fn export_case(request: &PrivacyRequest) -> DeskResult<String> {
    let value = serde_json::to_value(request)?;
    Ok(canonical_json(&value))
}

/// blake3 hex digest of the canonical encoding; equal cases always hash
/// equal.
pub fn export_fingerprint(request: &PrivacyRequest) -> DeskResult<String> {
    let text = export_case(request)?;
    Ok(blake3::hash(text.as_bytes()).to_hex().to_string())
}

fn write_value(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::Object(map) => {
            if map.is_empty() {
                out.push_str("{}");
                return;
            }
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push_str("{\n");
            for (i, key) in keys.iter().enumerate() {
                push_indent(out, depth + 1);
                out.push_str(&Value::String((*key).clone()).to_string());
                out.push_str(": ");
                write_value(out, &map[key.as_str()], depth + 1);
                if i + 1 < keys.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            push_indent(out, depth);
            out.push('}');
        }
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                push_indent(out, depth + 1);
                write_value(out, item, depth + 1);
                if i + 1 < items.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            push_indent(out, depth);
            out.push(']');
        }
        // Scalars already render canonically.
        other => out.push_str(&other.to_string()),
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}
