//! Initialization that needs to be done on startup

/// Installs the logger. Warnings and errors are shown by default, `RUST_LOG` overrides that.
pub fn init() {
    let env = env_logger::Env::default().default_filter_or("warn");
    // a logger may already be installed when running from a test harness
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
