//! tplsync: keep editor buffers bound to remote template records and push local
//! edits back on save.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use app::commands::{browse, close, create, delete, inspect, open, save, test_run, usage};
use serde_json::Value;

pub use app::commands::delete::DeleteOutcome;
pub use app::commands::open::OpenedTemplate;
pub use app::commands::save::SaveOutcome;
pub use app::commands::test_run::TestRunReport;
pub use app::{AppContext, init_logging};
pub use domain::{
    AppError, BindingRegistry, DocumentId, GatewayConfig, NewTemplate, RenderOutcome, SyncConfig,
    TemplateId, TemplateRecord, UsageInfo, ValidationReport, load_config, synthesize, validate,
};
pub use ports::{DocumentHost, TemplateGateway};
pub use services::HttpTemplateGateway;

/// Build a session context for `host` from the config file at `config_path`.
///
/// A missing file means defaults; the API key comes from the environment
/// variable named by `gateway.api_key_env`.
pub fn connect<H: DocumentHost>(
    config_path: &Path,
    host: H,
) -> Result<AppContext<HttpTemplateGateway, H>, AppError> {
    let config = load_config(config_path)?;
    let gateway = HttpTemplateGateway::from_env_with_config(&config.gateway)?;
    Ok(AppContext::new(gateway, host))
}

// =============================================================================
// Document Workflow API
// =============================================================================

/// Open template `id` into a new buffer and bind the two.
pub fn open<G: TemplateGateway, H: DocumentHost>(
    ctx: &mut AppContext<G, H>,
    id: &str,
) -> Result<OpenedTemplate, AppError> {
    open::execute(ctx, &TemplateId::new(id)?)
}

/// Push the current text of a bound buffer to its template.
pub fn save<G: TemplateGateway, H: DocumentHost>(
    ctx: &mut AppContext<G, H>,
    document: &DocumentId,
) -> Result<SaveOutcome, AppError> {
    save::execute(ctx, document)
}

/// Drop the binding of a closed buffer. Returns the snapshot it held, if any.
pub fn close<G: TemplateGateway, H: DocumentHost>(
    ctx: &mut AppContext<G, H>,
    document: &DocumentId,
) -> Option<TemplateRecord> {
    close::execute(ctx, document)
}

// =============================================================================
// Template Management API
// =============================================================================

pub fn create<G: TemplateGateway, H: DocumentHost>(
    ctx: &AppContext<G, H>,
    template: &NewTemplate,
) -> Result<TemplateRecord, AppError> {
    create::execute(ctx, template)
}

/// Delete template `id`. Buffers bound to it stay bound.
pub fn delete<G: TemplateGateway, H: DocumentHost>(
    ctx: &AppContext<G, H>,
    id: &str,
) -> Result<DeleteOutcome, AppError> {
    delete::execute(ctx, &TemplateId::new(id)?)
}

pub fn list<G: TemplateGateway, H: DocumentHost>(
    ctx: &AppContext<G, H>,
) -> Result<Vec<TemplateRecord>, AppError> {
    browse::list(ctx)
}

/// Case-insensitive substring search over name, description and category.
pub fn search<G: TemplateGateway, H: DocumentHost>(
    ctx: &AppContext<G, H>,
    query: &str,
) -> Result<Vec<TemplateRecord>, AppError> {
    browse::search(ctx, query)
}

// =============================================================================
// Testing & Inspection API
// =============================================================================

/// Render template `id` remotely with its stored or synthesized sample data.
pub fn test_run<G: TemplateGateway, H: DocumentHost>(
    ctx: &AppContext<G, H>,
    id: &str,
) -> Result<TestRunReport, AppError> {
    test_run::execute(ctx, &TemplateId::new(id)?)
}

pub fn validate_document<G: TemplateGateway, H: DocumentHost>(
    ctx: &AppContext<G, H>,
    document: &DocumentId,
) -> Result<ValidationReport, AppError> {
    inspect::validate_document(ctx, document)
}

pub fn generate_sample_data<G: TemplateGateway, H: DocumentHost>(
    ctx: &AppContext<G, H>,
    document: &DocumentId,
) -> Result<Value, AppError> {
    inspect::generate_sample_data(ctx, document)
}

/// Usage figures, or `None` if they could not be fetched.
pub fn usage<G: TemplateGateway, H: DocumentHost>(ctx: &AppContext<G, H>) -> Option<UsageInfo> {
    usage::execute(ctx)
}
