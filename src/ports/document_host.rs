//! Editor buffer port definition.

use crate::domain::{AppError, DocumentId};

/// Port for the editor that owns the editable buffers.
pub trait DocumentHost {
    /// Open a new editable buffer with `content` and return its handle.
    fn open_document(&self, title: &str, content: &str) -> Result<DocumentId, AppError>;

    /// Current text of the buffer, or `None` once it has been closed.
    fn document_text(&self, document: &DocumentId) -> Option<String>;
}
