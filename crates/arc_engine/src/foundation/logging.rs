//! Logging utilities

/// Initialize the logging system
///
/// Logs go to stderr at `info` unless `RUST_LOG` says otherwise. Calling this
/// more than once is harmless.
pub fn init() {
    let env = env_logger::Env::default().default_filter_or("info");
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}
