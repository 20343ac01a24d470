//! Delete a remote template.

use log::{info, warn};

use crate::app::AppContext;
use crate::domain::{AppError, DocumentId, TemplateId};
use crate::ports::{DocumentHost, TemplateGateway};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// Buffers still bound to the deleted template. They are left as they are;
    /// their next save fails with `NotFound`.
    pub stale_documents: Vec<DocumentId>,
}

pub fn execute<G: TemplateGateway, H: DocumentHost>(
    ctx: &AppContext<G, H>,
    id: &TemplateId,
) -> Result<DeleteOutcome, AppError> {
    ctx.gateway().delete(id)?;
    info!("Deleted template {}", id);

    let stale_documents: Vec<DocumentId> =
        ctx.bindings().documents_for(id).into_iter().cloned().collect();
    if !stale_documents.is_empty() {
        warn!("{} open document(s) still refer to deleted template {}", stale_documents.len(), id);
    }
    Ok(DeleteOutcome { stale_documents })
}
