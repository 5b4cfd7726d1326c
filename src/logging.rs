// src/logging.rs
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Map `-v` occurrences onto a level. `RUST_LOG` still wins when it is set.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. Stdout stays reserved for progress lines.
pub fn init(verbosity: u8) {
    let default = level_for(verbosity).as_str().to_ascii_lowercase();
    let mut builder = Builder::from_env(Env::default().default_filter_or(default));
    builder.format_timestamp(None).format_target(false);
    builder.init();
}
