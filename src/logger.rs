use std::io::Write;

use log::LevelFilter;

/// Initialize the logging system
///
/// Logs go to stderr so they never mix with command output. The level
/// defaults to `warn` and can be changed with `RUST_LOG`:
///
/// ```bash
/// RUST_LOG=debug gum switch work
/// ```
pub fn init_logger() {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);

    env_logger::Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .try_init()
        .ok(); // Ignore error if logger is already initialized
}
