mod field_casing;
mod template_gateway_http;

pub use template_gateway_http::HttpTemplateGateway;
