mod document_host;
mod template_gateway;

pub use document_host::DocumentHost;
pub use template_gateway::TemplateGateway;
