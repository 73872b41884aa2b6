//! Process-wide logger for the `team_lookup` binary.
//!
//! The library only talks to the `log` facade; this installs `env_logger`
//! behind it. Warnings from any crate and info from this one show by
//! default. Table events sit at `debug` and probe steps at `trace`:
//!
//! ```sh
//! RUST_LOG=dh_table=trace team_lookup
//! ```

use env_logger::{Builder, Env};
use log::LevelFilter;
use std::sync::Once;

static INSTALLED: Once = Once::new();

fn builder() -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format_timestamp_millis();
    for target in ["dh_table", "team_lookup"] {
        builder.filter_module(target, LevelFilter::Info);
    }
    // RUST_LOG directives win over the per-module defaults above
    builder.parse_default_env();
    builder
}

/// Installs the logger on first call; later calls do nothing. A logger set
/// by someone else is left in place.
pub fn initialize_logger() {
    INSTALLED.call_once(|| {
        if builder().try_init().is_err() {
            log::debug!("logger already installed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{debug, info};

    #[test]
    fn initialize_twice_is_harmless() {
        initialize_logger();
        initialize_logger();
        debug!("debug message in test");
        info!("info message in test");
    }

    #[test]
    fn builder_keeps_crate_at_info() {
        // safe to build repeatedly; nothing is installed
        let logger = builder().build();
        assert!(logger.filter() >= LevelFilter::Info);
    }
}
