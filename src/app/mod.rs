pub mod commands;
mod context;
mod logging;

pub use context::AppContext;
pub use logging::init_logging;
