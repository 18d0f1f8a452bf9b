//! Utility functions for all trainsplorer crates.
//!
//! Currently contains:
//!
//! - the `crate_name!` macro
//! - logging
//! - config
//! - time-of-day arithmetic (in `time`)

use config as cfg;
use serde::de::DeserializeOwned;
use log::*;

pub mod time;

#[macro_export]
macro_rules! crate_name {
    () => {module_path!().split("::").next().unwrap()}
}

/// Extension trait for populating crate configuration structs.
///
/// If a struct used for config implements `Deserialize`, this
/// trait can be used to populate it with values from `[crate name].toml`
/// in the current directory, and from `TSPL_*` environment variables.
///
/// A missing or broken config file is not fatal: the struct's serde
/// defaults fill in whatever is absent.
pub trait ConfigExt: DeserializeOwned {
    fn crate_name() -> &'static str;
    fn load() -> Result<Self, failure::Error> {
        let cn = Self::crate_name();
        info!("Loading trainsplorer config for crate {}", cn);
        let mut settings = cfg::Config::default();
        if let Err(e) = settings.merge(cfg::File::with_name(cn)) {
            warn!("Error loading config from file: {}", e);
            settings = cfg::Config::default();
        }
        let mut s2 = settings.clone();
        if let Err(e) = s2.merge(cfg::Environment::with_prefix("TSPL")) {
            warn!("Error loading config from env: {}", e);
        }
        else {
            settings = s2;
        }
        let ret = settings.try_into()?;
        Ok(ret)
    }
}

/// Initialize logging at the default (`Info`) level.
pub fn setup_logging() -> Result<(), failure::Error> {
    setup_logging_at(log::LevelFilter::Info)
}

/// Initialize logging, letting through records at `level` or above.
///
/// Fails if a logger has already been installed for this process.
pub fn setup_logging_at(level: log::LevelFilter) -> Result<(), failure::Error> {
    fern::Dispatch::new()
        .format(|out, msg, record| {
            out.finish(format_args!("[{} {}] {}",
                                    record.target(),
                                    record.level(),
                                    msg))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()?;
    Ok(())
}
