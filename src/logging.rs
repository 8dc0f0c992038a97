//! Debug-build file logger
//!
//! The terminal is in raw mode while the UI runs, so log records go to
//! `~/.cache/tripseek/tripseek.log` instead of stderr. Release builds
//! install no logger and every `log::` call compiles to a no-op check.

#[cfg(debug_assertions)]
use std::path::PathBuf;

#[cfg(debug_assertions)]
const LOG_DIR: &str = "tripseek";
#[cfg(debug_assertions)]
const LOG_FILE: &str = "tripseek.log";

#[cfg(debug_assertions)]
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join(LOG_DIR).join(LOG_FILE))
}

/// Install the logger. Failures are ignored; logging is best effort.
#[cfg(debug_assertions)]
pub fn init() {
    use std::fs::{self, OpenOptions};
    use std::io::Write;

    let Some(path) = log_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}

#[cfg(not(debug_assertions))]
pub fn init() {}
