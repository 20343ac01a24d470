//! Local checks on the current text of a buffer.

use serde_json::Value;

use crate::app::AppContext;
use crate::domain::{AppError, DocumentId, ValidationReport, synthesize, validate};
use crate::ports::{DocumentHost, TemplateGateway};

fn current_text<G: TemplateGateway, H: DocumentHost>(
    ctx: &AppContext<G, H>,
    document: &DocumentId,
) -> Result<String, AppError> {
    ctx.host()
        .document_text(document)
        .ok_or_else(|| AppError::DocumentUnavailable(document.clone()))
}

/// Run the markup heuristic on the buffer. Works for unbound buffers too.
pub fn validate_document<G: TemplateGateway, H: DocumentHost>(
    ctx: &AppContext<G, H>,
    document: &DocumentId,
) -> Result<ValidationReport, AppError> {
    Ok(validate(&current_text(ctx, document)?))
}

/// Sample data derived from the variable references in the buffer.
pub fn generate_sample_data<G: TemplateGateway, H: DocumentHost>(
    ctx: &AppContext<G, H>,
    document: &DocumentId,
) -> Result<Value, AppError> {
    Ok(synthesize(&current_text(ctx, document)?))
}
