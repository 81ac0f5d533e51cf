use env_logger::{Builder, Env};

/// Installs the global logger. `RUST_LOG` takes precedence over `verbose`.
pub fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    Builder::from_env(Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}
