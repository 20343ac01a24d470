//! Forget the binding of a buffer the editor closed.

use log::info;

use crate::app::AppContext;
use crate::domain::{DocumentId, TemplateRecord};
use crate::ports::{DocumentHost, TemplateGateway};

/// Unbind `document`. No network call; closing an unbound document is a no-op.
pub fn execute<G: TemplateGateway, H: DocumentHost>(
    ctx: &mut AppContext<G, H>,
    document: &DocumentId,
) -> Option<TemplateRecord> {
    let removed = ctx.bindings_mut().unbind(document);
    if let Some(record) = &removed {
        info!("Closed {} (template {})", document, record.id);
    }
    removed
}
