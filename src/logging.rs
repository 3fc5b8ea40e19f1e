use env_logger::{Builder, Env, Target};

/// Logs go to stderr; stdout carries only the session transcript.
pub(crate) fn init(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(default_filter))
        .target(Target::Stderr)
        .init();
}
