//! Logging setup for the CLI.
//!
//! Uses the standard `log` facade with `env_logger` as the backend, driven
//! by the RUST_LOG environment variable:
//! - RUST_LOG=info (default): normal operation logs
//! - RUST_LOG=debug: external command lines and other detail
//!
//! Quiet mode raises the default console filter to errors only; an explicit
//! RUST_LOG still wins.

pub fn init(quiet: bool) {
    let default_filter = if quiet { "error" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_secs()
        .init();
}
