//! Shared helpers for integration tests.

use std::cell::RefCell;
use std::collections::HashMap;

use mockito::Server;
use tplsync::{AppContext, AppError, DocumentHost, DocumentId, GatewayConfig, HttpTemplateGateway};
use url::Url;

/// Editor stand-in keeping buffers in memory.
#[derive(Default)]
pub struct MemoryHost {
    buffers: RefCell<HashMap<DocumentId, String>>,
    next: RefCell<u32>,
}

#[allow(dead_code)]
impl MemoryHost {
    pub fn type_text(&self, document: &DocumentId, text: &str) {
        self.buffers.borrow_mut().insert(document.clone(), text.to_string());
    }

    pub fn close(&self, document: &DocumentId) {
        self.buffers.borrow_mut().remove(document);
    }
}

impl DocumentHost for MemoryHost {
    fn open_document(&self, _title: &str, content: &str) -> Result<DocumentId, AppError> {
        let mut next = self.next.borrow_mut();
        *next += 1;
        let document = DocumentId::new(format!("untitled:{}", next));
        self.buffers.borrow_mut().insert(document.clone(), content.to_string());
        Ok(document)
    }

    fn document_text(&self, document: &DocumentId) -> Option<String> {
        self.buffers.borrow().get(document).cloned()
    }
}

/// Session context talking to `server`.
pub fn session(server: &Server) -> AppContext<HttpTemplateGateway, MemoryHost> {
    let config = GatewayConfig {
        api_url: Url::parse(&format!("{}/api", server.url())).expect("mock server url"),
        timeout_secs: Some(5),
        ..GatewayConfig::default()
    };
    let gateway = HttpTemplateGateway::new("integration-key".to_string(), &config)
        .expect("Failed to build gateway");
    AppContext::new(gateway, MemoryHost::default())
}

pub const WELCOME_JSON: &str = r#"{
    "Id": "tpl-1",
    "Name": "Welcome",
    "Category": "Onboarding",
    "Description": "Sent after signup",
    "Content": "Hello {{ user.name }}",
    "SampleData": "{\"user\":{\"name\":\"Ada\"}}",
    "IsActive": true,
    "CreatedAt": "2026-01-01T00:00:00Z",
    "UpdatedAt": "2026-01-01T00:00:00Z"
}"#;
