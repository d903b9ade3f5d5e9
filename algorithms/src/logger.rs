use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

pub fn initialize_logger() {
    initialize_logger_with(LevelFilter::Info);
}

/// `level` applies to this crate and the replay binary; everything else
/// logs warnings only. `RUST_LOG` still overrides both.
pub fn initialize_logger_with(level: LevelFilter) {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("algorithms", level)
            .filter_module("probe_replay", level)
            .format_timestamp_millis()
            .parse_default_env();

        // Another logger may already be installed by the host process.
        let _ = builder.try_init();
    });
}

#[cfg(test)]
mod tests {
    use log::{debug, info};

    use super::*;

    #[test]
    fn repeated_initialisation_is_harmless() {
        initialize_logger_with(LevelFilter::Debug);
        initialize_logger();
        debug!("debug message in test");
        info!("info message in test");
    }
}
