pub mod binding;
pub mod configuration;
pub mod error;
pub mod identities;
pub mod sample_data;
pub mod search;
pub mod template;
pub mod validation;

pub use binding::BindingRegistry;
pub use configuration::{GatewayConfig, SyncConfig, load_config, parse_config_content};
pub use error::AppError;
pub use identities::{DocumentId, TemplateId};
pub use sample_data::{default_fixture, synthesize};
pub use search::matches_query;
pub use template::{NewTemplate, RenderOutcome, TemplateRecord, UsageInfo};
pub use validation::{ValidationReport, validate};
