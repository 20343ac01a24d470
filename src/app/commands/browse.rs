//! Listing used by the browse view. Never touches bindings.

use crate::app::AppContext;
use crate::domain::{AppError, TemplateRecord, matches_query};
use crate::ports::{DocumentHost, TemplateGateway};

pub fn list<G: TemplateGateway, H: DocumentHost>(
    ctx: &AppContext<G, H>,
) -> Result<Vec<TemplateRecord>, AppError> {
    ctx.gateway().list()
}

/// Templates whose name, description or category contains `query`, ignoring case.
pub fn search<G: TemplateGateway, H: DocumentHost>(
    ctx: &AppContext<G, H>,
    query: &str,
) -> Result<Vec<TemplateRecord>, AppError> {
    let mut records = ctx.gateway().list()?;
    records.retain(|record| matches_query(record, query));
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::commands::open;
    use crate::domain::TemplateId;
    use crate::testing::{FakeDocumentHost, FakeTemplateGateway, sample_record};

    #[test]
    fn search_filters_listing() {
        let mut invoice = sample_record("tpl-2", "Total {{ order.total }}");
        invoice.name = "Invoice".to_string();
        invoice.category = "Finance".to_string();
        invoice.description = "Monthly statement".to_string();
        let gateway = FakeTemplateGateway::new()
            .with_record(sample_record("tpl-1", "Hi"))
            .with_record(invoice);
        let ctx = AppContext::new(gateway, FakeDocumentHost::new());

        let hits = search(&ctx, "FINANCE").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "tpl-2");
        assert_eq!(list(&ctx).unwrap().len(), 2);
    }

    #[test]
    fn listing_does_not_refresh_bound_snapshots() {
        let gateway = FakeTemplateGateway::new().with_record(sample_record("tpl-1", "Hi"));
        let mut ctx = AppContext::new(gateway.clone(), FakeDocumentHost::new());
        let opened = open::execute(&mut ctx, &TemplateId::new("tpl-1").unwrap()).unwrap();

        gateway.records.lock().unwrap().get_mut(&opened.record.id).unwrap().content =
            "edited elsewhere".to_string();
        let listing = list(&ctx).unwrap();

        assert_eq!(listing[0].content, "edited elsewhere");
        assert_eq!(ctx.bindings().lookup(&opened.document).unwrap().content, "Hi");
    }
}
