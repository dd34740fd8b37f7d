//! Settings for the `ippc` binary: where the document goes, which format it
//! is written in, the program name and how loud logging is.
//!
//! The defaults live in `defaults/ippc.default.toml`, compiled in with
//! `include_str!`. A `--config` file and the command-line flags are layered
//! over them by [`Loader`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::logger::DEBUG_VERBOSITY;

const DEFAULT_TOML: &str = include_str!("../defaults/ippc.default.toml");

/// Top-level configuration consumed by the `ippc` binary.
#[derive(Debug, Clone, Deserialize)]
pub struct IppcConfig {
    pub output: OutputConfig,
    #[serde(default)]
    pub program: ProgramConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Output path used when none is given, `-` for stdout
    pub path: String,
    pub format: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgramConfig {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub verbosity: u8,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Values taken from the `ippc` command line. Anything set here wins over
/// both the embedded defaults and a `--config` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// Second positional argument (`-` for stdout)
    pub output: Option<String>,
    /// `--name`
    pub name: Option<String>,
    /// `--format`
    pub format: Option<String>,
    /// `--debug` raises `logging.verbosity` to debug
    pub debug: bool,
}

/// Builds an [`IppcConfig`] from the embedded defaults, an optional TOML
/// file and the command line, in that order of precedence (last wins).
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder()
                .add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Layer the file named by `--config`; building fails if it is missing.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer a TOML file only when it exists.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path)
            .format(FileFormat::Toml)
            .required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Set one dotted key, e.g. `output.path`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Apply every command-line value that was given.
    pub fn with_cli(self, cli: &CliOverrides) -> Result<Self, ConfigError> {
        let mut loader = self;
        if let Some(output) = &cli.output {
            loader = loader.set_override("output.path", output.as_str())?;
        }
        if let Some(name) = &cli.name {
            loader = loader.set_override("program.name", name.as_str())?;
        }
        if let Some(format) = &cli.format {
            loader = loader.set_override("output.format", format.as_str())?;
        }
        if cli.debug {
            loader = loader.set_override("logging.verbosity", DEBUG_VERBOSITY as i64)?;
        }
        Ok(loader)
    }

    pub fn build(self) -> Result<IppcConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The configuration `ippc` runs with when given no file and no flags.
pub fn load_defaults() -> Result<IppcConfig, ConfigError> {
    Loader::new().build()
}
