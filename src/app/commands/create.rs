//! Create a new remote template.

use log::info;

use crate::app::AppContext;
use crate::domain::{AppError, NewTemplate, TemplateRecord};
use crate::ports::{DocumentHost, TemplateGateway};

/// Create `template` remotely. Blank name or content fails locally.
///
/// The new record is not opened or bound; callers open it explicitly.
pub fn execute<G: TemplateGateway, H: DocumentHost>(
    ctx: &AppContext<G, H>,
    template: &NewTemplate,
) -> Result<TemplateRecord, AppError> {
    template.validate()?;
    let record = ctx.gateway().create(template)?;
    info!("Created template '{}' ({})", record.name, record.id);
    Ok(record)
}
