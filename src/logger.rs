//! Logging setup for the `ippc` binary.
//!
//! Library code only talks to the `log` macros. The binary calls [configure]
//! once with the `[logging]` settings, and records then go to stderr or to
//! `logging.file`, never to the document destination.
use env_logger::{Builder, Target};
use log::{trace, LevelFilter};
use std::fs::File;
use std::io::Write;

use crate::config::LoggingConfig;

/// Verbosity selected by `--debug`: token listing and document are shown.
pub const DEBUG_VERBOSITY: u8 = 3;

/// Map `logging.verbosity` to a level filter. 0 keeps only errors, 4 traces
/// every assembled instruction.
pub fn level_for(verbosity: u8) -> Result<LevelFilter, String> {
    match verbosity {
        0 => Ok(LevelFilter::Error),
        1 => Ok(LevelFilter::Warn),
        2 => Ok(LevelFilter::Info),
        3 => Ok(LevelFilter::Debug),
        4 => Ok(LevelFilter::Trace),
        _ => Err(format!("logging.verbosity {} is out of range (0-4)", verbosity)),
    }
}

/// Install the global logger. Fails on an out of range verbosity, on a log
/// file that cannot be created, or when a logger is already installed.
pub fn configure(settings: &LoggingConfig) -> Result<(), String> {
    let level = level_for(settings.verbosity)?;
    let mut builder = Builder::new();

    if let Some(path) = &settings.file {
        let file = File::create(path)
            .map_err(|e| format!("Unable to create log file {}: {}", path.display(), e))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .filter_level(level)
        .try_init()
        .map_err(|e| e.to_string())?;

    trace!("ippc logging at {level}");
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::config::LoggingConfig;
    use crate::logger::{configure, level_for, DEBUG_VERBOSITY};
    use log::LevelFilter;

    #[test]
    fn configure_when_verbosity_is_5_then_return_err() {
        let settings = LoggingConfig {
            verbosity: 5,
            file: None,
        };

        assert!(configure(&settings).is_err());
    }

    #[test]
    fn level_for_maps_counts() {
        assert_eq!(level_for(0), Ok(LevelFilter::Error));
        assert_eq!(level_for(DEBUG_VERBOSITY), Ok(LevelFilter::Debug));
        assert_eq!(level_for(4), Ok(LevelFilter::Trace));
    }
}
