//! Registry of editor documents opened from remote templates.

use std::collections::HashMap;

use super::{DocumentId, TemplateId, TemplateRecord};

/// Maps each open document to the template snapshot it was opened from.
///
/// One registry lives per editor session and is owned by the
/// [`AppContext`](crate::app::AppContext). It never talks to the network and
/// cannot fail: a missing entry means the document is not a managed template.
#[derive(Debug, Default, Clone)]
pub struct BindingRegistry {
    bindings: HashMap<DocumentId, TemplateRecord>,
}

impl BindingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or overwrite the binding for `document`.
    pub fn bind(&mut self, document: DocumentId, record: TemplateRecord) {
        self.bindings.insert(document, record);
    }

    pub fn lookup(&self, document: &DocumentId) -> Option<&TemplateRecord> {
        self.bindings.get(document)
    }

    /// Remove the binding for `document`. Unbinding an unknown document is a no-op.
    pub fn unbind(&mut self, document: &DocumentId) -> Option<TemplateRecord> {
        self.bindings.remove(document)
    }

    pub fn is_bound(&self, document: &DocumentId) -> bool {
        self.bindings.contains_key(document)
    }

    /// Documents currently bound to `id`, sorted for stable output.
    pub fn documents_for(&self, id: &TemplateId) -> Vec<&DocumentId> {
        let mut documents: Vec<&DocumentId> = self
            .bindings
            .iter()
            .filter(|(_, record)| &record.id == id)
            .map(|(document, _)| document)
            .collect();
        documents.sort();
        documents
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
