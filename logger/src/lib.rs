use env_logger::Builder;
use env_logger::Env;
use log::LevelFilter;

/// Initializes logging to stderr.
///
/// Defaults to `info`; `RUST_LOG` overrides it.
pub fn init() {
    init_with_level(LevelFilter::Info);
}

pub fn init_with_level(level: LevelFilter) {
    Builder::from_env(Env::default().default_filter_or(level.as_str()))
        .format_timestamp(None)
        .init();
}
