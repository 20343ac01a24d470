//! Push a bound buffer back to its remote template.

use chrono::{SecondsFormat, Utc};
use log::{info, warn};

use crate::app::AppContext;
use crate::domain::{AppError, DocumentId, TemplateRecord};
use crate::ports::{DocumentHost, TemplateGateway};

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome {
    /// The binding as refreshed after the save.
    pub record: TemplateRecord,
    /// False when the service accepted the update without returning a record;
    /// `record.updated_at` is then the local save time.
    pub confirmed_by_server: bool,
}

fn local_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Send the whole bound record, with the buffer's current text as `content`.
///
/// The binding only changes on success: `content` becomes the saved text and
/// `updated_at` advances, every other field is carried over from the snapshot.
/// Nothing guards against overlapping saves of the same document; whichever
/// response arrives last is what the registry keeps.
pub fn execute<G: TemplateGateway, H: DocumentHost>(
    ctx: &mut AppContext<G, H>,
    document: &DocumentId,
) -> Result<SaveOutcome, AppError> {
    let snapshot = ctx
        .bindings()
        .lookup(document)
        .cloned()
        .ok_or_else(|| AppError::NotBound(document.clone()))?;
    let text = ctx
        .host()
        .document_text(document)
        .ok_or_else(|| AppError::DocumentUnavailable(document.clone()))?;

    let saved_at = local_timestamp();
    let payload = snapshot.with_content(text, Some(saved_at.clone()));
    payload.ensure_writable()?;

    let response = ctx.gateway().update(&payload.id, &payload).inspect_err(|e| {
        warn!("Save of {} to template {} failed: {}", document, payload.id, e);
    })?;

    let confirmed_by_server = response.is_some();
    let updated_at = response.and_then(|r| r.updated_at).unwrap_or(saved_at);
    let refreshed = snapshot.with_content(payload.content, Some(updated_at));

    info!("Saved {} to template '{}' ({})", document, refreshed.name, refreshed.id);
    ctx.bindings_mut().bind(document.clone(), refreshed.clone());

    Ok(SaveOutcome { record: refreshed, confirmed_by_server })
}
