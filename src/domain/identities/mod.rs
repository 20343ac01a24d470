pub mod document_id;
pub mod template_id;

pub use document_id::DocumentId;
pub use template_id::TemplateId;
