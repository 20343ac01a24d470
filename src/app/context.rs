use crate::domain::BindingRegistry;
use crate::ports::{DocumentHost, TemplateGateway};

/// Per-session state: the ports plus the registry of bound documents.
///
/// The registry lives and dies with the editor session that owns this context.
pub struct AppContext<G: TemplateGateway, H: DocumentHost> {
    gateway: G,
    host: H,
    bindings: BindingRegistry,
}

impl<G: TemplateGateway, H: DocumentHost> AppContext<G, H> {
    /// Create a new application context with an empty registry.
    pub fn new(gateway: G, host: H) -> Self {
        Self { gateway, host, bindings: BindingRegistry::new() }
    }

    /// Get a reference to the template gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Get a reference to the editor host.
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn bindings(&self) -> &BindingRegistry {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut BindingRegistry {
        &mut self.bindings
    }
}
