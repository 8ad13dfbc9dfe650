use env_logger::Env;

use crate::constants::LOG_ENV;

/// Initializes the global logger.
///
/// `RIOTGEN_LOG` takes precedence over the level picked from `verbose`.
pub fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().filter_or(LOG_ENV, level))
        .format_timestamp(None)
        .init();
}
