//! Open a remote template into a new editor buffer.

use log::info;

use crate::app::AppContext;
use crate::domain::{AppError, DocumentId, TemplateId, TemplateRecord};
use crate::ports::{DocumentHost, TemplateGateway};

/// The buffer created for a template and the snapshot it is bound to.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenedTemplate {
    pub document: DocumentId,
    pub record: TemplateRecord,
}

/// Fetch the full record, open a buffer with its content and bind the two.
///
/// Always fetches by id: list summaries may lack `sample_data` and `schema`.
pub fn execute<G: TemplateGateway, H: DocumentHost>(
    ctx: &mut AppContext<G, H>,
    id: &TemplateId,
) -> Result<OpenedTemplate, AppError> {
    let record = ctx.gateway().get(id)?;
    let document = ctx.host().open_document(&record.document_title(), &record.content)?;

    info!("Opened template '{}' ({}) as {}", record.name, record.id, document);
    ctx.bindings_mut().bind(document.clone(), record.clone());

    Ok(OpenedTemplate { document, record })
}
