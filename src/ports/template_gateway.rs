//! Remote template service port definition.

use serde_json::Value;

use crate::domain::{AppError, NewTemplate, RenderOutcome, TemplateId, TemplateRecord, UsageInfo};

/// Port for the remote template service.
///
/// Implementations return canonical records only; any field-casing quirks of
/// the wire format are resolved before a value leaves the adapter. No
/// implementation retries on its own.
pub trait TemplateGateway {
    /// Summaries of every template visible to the caller. Entries may omit
    /// `sample_data` and `schema`.
    fn list(&self) -> Result<Vec<TemplateRecord>, AppError>;

    /// Full record for `id`, or [`AppError::NotFound`].
    fn get(&self, id: &TemplateId) -> Result<TemplateRecord, AppError>;

    /// Create a template and return the record the service stored.
    fn create(&self, template: &NewTemplate) -> Result<TemplateRecord, AppError>;

    /// Replace the remote record with `record`.
    ///
    /// `Ok(None)` means the service accepted the update without returning a body.
    fn update(
        &self,
        id: &TemplateId,
        record: &TemplateRecord,
    ) -> Result<Option<TemplateRecord>, AppError>;

    /// Delete the remote record.
    fn delete(&self, id: &TemplateId) -> Result<(), AppError>;

    /// Render `id` remotely with `sample_data`.
    fn render(&self, id: &TemplateId, sample_data: &Value) -> Result<RenderOutcome, AppError>;

    /// Account usage figures.
    fn usage(&self) -> Result<UsageInfo, AppError>;
}
