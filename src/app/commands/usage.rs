//! Account usage, fetched best-effort.

use log::warn;

use crate::app::AppContext;
use crate::domain::UsageInfo;
use crate::ports::{DocumentHost, TemplateGateway};

/// Usage figures, or `None` when the service could not provide them.
pub fn best_effort<G: TemplateGateway + ?Sized>(gateway: &G) -> Option<UsageInfo> {
    gateway.usage().inspect_err(|e| warn!("Usage information unavailable: {}", e)).ok()
}

pub fn execute<G: TemplateGateway, H: DocumentHost>(ctx: &AppContext<G, H>) -> Option<UsageInfo> {
    best_effort(ctx.gateway())
}
