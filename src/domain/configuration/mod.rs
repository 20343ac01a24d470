pub mod loader;
pub mod sync_config;

pub use loader::{load_config, parse_config_content};
pub use sync_config::{GatewayConfig, SyncConfig};
