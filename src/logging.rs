//! Tracing setup for hosts that do not install their own subscriber.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `inline_calc=trace`.
pub const LOG_ENV: &str = "INLINE_CALC_LOG";

/// Install a fmt subscriber filtered by [`LOG_ENV`] (default `warn`).
///
/// Does nothing if a global subscriber is already set.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init();
        init();
        tracing::debug!("logging initialised");
    }
}
