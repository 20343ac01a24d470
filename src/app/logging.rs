use env_logger::Env;

/// Install the `env_logger` backend with an `info` default. `RUST_LOG` overrides it.
///
/// Safe to call more than once; later calls leave the first logger in place.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}
