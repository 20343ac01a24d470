//! Remote template records and the payloads exchanged with the service.

use serde::Serialize;
use serde_json::{Map, Value};

use super::{AppError, TemplateId};

/// A template as owned by the remote service.
///
/// `id` never changes once assigned. `name` and `content` must be non-empty
/// for any write.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRecord {
    pub id: TemplateId,
    pub name: String,
    pub category: String,
    pub description: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_data: Option<String>,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
}

impl TemplateRecord {
    /// Minimal record with empty metadata, mostly useful for hosts and tests.
    pub fn new(id: TemplateId, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: String::new(),
            description: String::new(),
            content: content.into(),
            sample_data: None,
            is_active: true,
            created_at: None,
            updated_at: None,
            schema: None,
        }
    }

    /// Reject the record for writing when a required field is blank.
    pub fn ensure_writable(&self) -> Result<(), AppError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("content", &self.content)
    }

    /// Copy of this record carrying new content and a new modification time.
    pub fn with_content(&self, content: impl Into<String>, updated_at: Option<String>) -> Self {
        Self { content: content.into(), updated_at, ..self.clone() }
    }

    /// Title shown for the editor buffer opened from this record.
    pub fn document_title(&self) -> String {
        if self.category.trim().is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.category)
        }
    }
}

/// Fields supplied when creating a template; the service assigns the rest.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTemplate {
    pub name: String,
    pub category: String,
    pub description: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_data: Option<String>,
    pub is_active: bool,
}

impl NewTemplate {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: String::new(),
            description: String::new(),
            content: content.into(),
            sample_data: None,
            is_active: true,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("content", &self.content)
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("template {field} must not be empty")));
    }
    Ok(())
}

/// Result of a remote test render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutcome {
    pub output: String,
    pub error: Option<String>,
    pub render_time_seconds: Option<f64>,
}

impl RenderOutcome {
    pub fn is_success(&self) -> bool {
        self.error.as_deref().is_none_or(|e| e.trim().is_empty())
    }
}

/// Account usage figures reported by the service.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UsageInfo {
    pub usage_count: u64,
    pub usage_limit: Option<u64>,
    pub tier: Option<String>,
    /// Any other fields the service reported, keyed as received.
    pub extra: Map<String, Value>,
}

impl UsageInfo {
    /// Renders left before the limit, if the plan has one.
    pub fn remaining(&self) -> Option<u64> {
        self.usage_limit.map(|limit| limit.saturating_sub(self.usage_count))
    }
}
