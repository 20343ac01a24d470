//! Normalization of service responses into canonical records.
//!
//! The template API is inconsistent about field casing (`sampleData` vs
//! `SampleData`). Every response object goes through here once, right at the
//! gateway boundary, so nothing above the adapter ever guesses casing.

use log::warn;
use serde_json::{Map, Value};

use crate::domain::{AppError, RenderOutcome, TemplateId, TemplateRecord, UsageInfo};

/// Look up `name` as written, then with its first letter lowered, then raised.
/// JSON `null` counts as absent.
pub(crate) fn field<'a>(object: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    let candidates = [name.to_string(), with_first(name, false), with_first(name, true)];
    candidates.iter().filter_map(|key| object.get(key)).find(|value| !value.is_null())
}

fn with_first(name: &str, upper: bool) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if upper => first.to_uppercase().chain(chars).collect(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn any_field<'a>(object: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| field(object, name))
}

/// Strings stay as-is; structured JSON is kept as compact JSON text.
fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn text_field(object: &Map<String, Value>, name: &str) -> String {
    field(object, name).map(text).unwrap_or_default()
}

fn optional_text(object: &Map<String, Value>, name: &str) -> Option<String> {
    field(object, name).map(text)
}

fn bool_field(object: &Map<String, Value>, name: &str, default: bool) -> bool {
    match field(object, name) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_i64().is_some_and(|n| n != 0),
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true") || s == "1",
        _ => default,
    }
}

fn u64_field(object: &Map<String, Value>, name: &str) -> Option<u64> {
    match field(object, name)? {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().map(|f| f.max(0.0) as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_object<'a>(value: &'a Value, what: &str) -> Result<&'a Map<String, Value>, AppError> {
    value
        .as_object()
        .ok_or_else(|| AppError::MalformedResponse(format!("expected {what} object, got {value}")))
}

/// Whether `value` is a template object with a usable id, as opposed to a bare
/// acknowledgement such as `{"success":true}` or `null`.
pub(crate) fn carries_record(value: &Value) -> bool {
    value
        .as_object()
        .and_then(|object| field(object, "id"))
        .is_some_and(|id| TemplateId::new(&text(id)).is_ok())
}

/// Canonical record from one response object.
pub(crate) fn normalize_record(value: &Value) -> Result<TemplateRecord, AppError> {
    let object = as_object(value, "template")?;
    let raw_id = field(object, "id")
        .map(text)
        .ok_or_else(|| AppError::MalformedResponse("template without id".to_string()))?;
    let id = TemplateId::new(&raw_id)
        .map_err(|_| AppError::MalformedResponse(format!("template id '{raw_id}' is not usable")))?;

    Ok(TemplateRecord {
        id,
        name: text_field(object, "name"),
        category: text_field(object, "category"),
        description: text_field(object, "description"),
        content: text_field(object, "content"),
        sample_data: optional_text(object, "sampleData"),
        is_active: bool_field(object, "isActive", true),
        created_at: optional_text(object, "createdAt"),
        updated_at: optional_text(object, "updatedAt"),
        schema: optional_text(object, "schema"),
    })
}

/// Canonical records from a list response: a bare array, or an object wrapping
/// the array under `templates`, `items` or `data`.
///
/// Entries that cannot be normalized are logged and skipped.
pub(crate) fn normalize_records(value: &Value) -> Result<Vec<TemplateRecord>, AppError> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(object) => any_field(object, &["templates", "items", "data"])
            .and_then(Value::as_array)
            .ok_or_else(|| {
                AppError::MalformedResponse("list response has no template array".to_string())
            })?,
        other => {
            return Err(AppError::MalformedResponse(format!(
                "expected template list, got {other}"
            )));
        }
    };
    Ok(items
        .iter()
        .filter_map(|item| match normalize_record(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping template list entry: {}", e);
                None
            }
        })
        .collect())
}

pub(crate) fn normalize_render(value: &Value) -> Result<RenderOutcome, AppError> {
    let object = as_object(value, "render result")?;
    let render_time_seconds = any_field(object, &["renderTimeSeconds", "renderTime"]).and_then(
        |v| match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        },
    );

    Ok(RenderOutcome {
        output: text_field(object, "output"),
        error: optional_text(object, "error"),
        render_time_seconds,
    })
}

pub(crate) fn normalize_usage(value: &Value) -> Result<UsageInfo, AppError> {
    let object = as_object(value, "usage")?;
    let known = ["usagecount", "usagelimit", "tier"];
    let extra = object
        .iter()
        .filter(|(key, _)| !known.contains(&key.to_lowercase().as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Ok(UsageInfo {
        usage_count: u64_field(object, "usageCount").unwrap_or(0),
        usage_limit: u64_field(object, "usageLimit"),
        tier: optional_text(object, "tier"),
        extra,
    })
}
