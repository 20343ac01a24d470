use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, DocumentId};
use crate::ports::DocumentHost;

/// In-memory editor: buffers are numbered in opening order.
#[derive(Clone, Default)]
pub struct FakeDocumentHost {
    buffers: Arc<Mutex<HashMap<DocumentId, String>>>,
    titles: Arc<Mutex<Vec<String>>>,
}

impl FakeDocumentHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the user typing into a buffer.
    pub fn edit(&self, document: &DocumentId, text: &str) {
        self.buffers.lock().unwrap().insert(document.clone(), text.to_string());
    }

    /// Simulate the user closing a buffer in the editor.
    pub fn close(&self, document: &DocumentId) {
        self.buffers.lock().unwrap().remove(document);
    }

    pub fn opened_titles(&self) -> Vec<String> {
        self.titles.lock().unwrap().clone()
    }
}

impl DocumentHost for FakeDocumentHost {
    fn open_document(&self, title: &str, content: &str) -> Result<DocumentId, AppError> {
        let mut titles = self.titles.lock().unwrap();
        titles.push(title.to_string());
        let document = DocumentId::new(format!("buffer-{}", titles.len()));
        self.buffers.lock().unwrap().insert(document.clone(), content.to_string());
        Ok(document)
    }

    fn document_text(&self, document: &DocumentId) -> Option<String> {
        self.buffers.lock().unwrap().get(document).cloned()
    }
}
