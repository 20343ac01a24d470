mod fake_document_host;
mod fake_template_gateway;

pub use fake_document_host::FakeDocumentHost;
pub use fake_template_gateway::FakeTemplateGateway;

use crate::domain::{TemplateId, TemplateRecord};

/// Fully populated record for tests.
pub fn sample_record(id: &str, content: &str) -> TemplateRecord {
    TemplateRecord {
        category: "Onboarding".to_string(),
        description: "Sent after signup".to_string(),
        sample_data: Some(r#"{"user":{"name":"Ada"}}"#.to_string()),
        created_at: Some("2026-01-01T00:00:00Z".to_string()),
        updated_at: Some("2026-01-01T00:00:00Z".to_string()),
        schema: Some(r#"{"type":"object"}"#.to_string()),
        ..TemplateRecord::new(TemplateId::new(id).unwrap(), "Welcome", content)
    }
}
