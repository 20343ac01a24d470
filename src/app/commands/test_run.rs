//! Render a template remotely with sample data.

use log::{info, warn};
use serde_json::Value;

use super::usage;
use crate::app::AppContext;
use crate::domain::{
    AppError, RenderOutcome, TemplateId, TemplateRecord, UsageInfo, ValidationReport, synthesize,
    validate,
};
use crate::ports::{DocumentHost, TemplateGateway};

#[derive(Debug, Clone, PartialEq)]
pub struct TestRunReport {
    pub template: TemplateRecord,
    /// Heuristic findings; reported, never blocking.
    pub validation: ValidationReport,
    pub sample_data: Value,
    /// True when `sample_data` was synthesized instead of taken from the record.
    pub sample_data_generated: bool,
    pub outcome: RenderOutcome,
    /// Best-effort; `None` when the usage call failed.
    pub usage: Option<UsageInfo>,
}

fn stored_sample_data(record: &TemplateRecord) -> Option<Value> {
    let raw = record.sample_data.as_deref().filter(|s| !s.trim().is_empty())?;
    serde_json::from_str(raw)
        .inspect_err(|e| warn!("Ignoring unparsable sample data of {}: {}", record.id, e))
        .ok()
}

pub fn execute<G: TemplateGateway, H: DocumentHost>(
    ctx: &AppContext<G, H>,
    id: &TemplateId,
) -> Result<TestRunReport, AppError> {
    let template = ctx.gateway().get(id)?;

    let validation = validate(&template.content);
    if !validation.is_valid {
        warn!("Template {} looks malformed: {}", id, validation.errors.join("; "));
    }

    let (sample_data, sample_data_generated) = match stored_sample_data(&template) {
        Some(data) => (data, false),
        None => (synthesize(&template.content), true),
    };

    let outcome = ctx.gateway().render(id, &sample_data)?;
    info!(
        "Rendered {} in {}",
        id,
        outcome.render_time_seconds.map_or_else(|| "?".to_string(), |s| format!("{s:.3}s"))
    );

    Ok(TestRunReport {
        template,
        validation,
        sample_data,
        sample_data_generated,
        outcome,
        usage: usage::best_effort(ctx.gateway()),
    })
}
