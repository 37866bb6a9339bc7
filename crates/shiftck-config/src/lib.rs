//! Configuration of a conformance run.
//!
//! Settings are layered, later layers winning: built-in defaults, a `shiftck.toml` (or
//! `.shiftck.toml`) found in the current directory or one of its parents, `SHIFTCK_*`
//! environment variables, and finally `-S<key>[=<value>]` command line flags.
mod flags;

use std::path::{Path, PathBuf};

use config::{Environment, File, FileFormat};
use serde::Deserialize;
use shiftck_semantics::Width;
use thiserror::Error;

/// Exit status code used for invalid configuration.
pub const EXIT_FAILURE: i32 = 2;

pub const ENV_PREFIX: &str = "SHIFTCK";

const CONFIG_FILE_NAMES: [&str; 2] = ["shiftck.toml", ".shiftck.toml"];

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Only run groups whose name contains this substring. Empty runs every group.
    pub only: String,
    /// Only run groups of this width.
    #[serde(default)]
    pub width: Option<Width>,
    /// Keep checking after a mismatch and report every mismatch at the end.
    pub keep_going: bool,
    /// Log every group and case on stderr.
    pub verbose: bool,
    /// Dump a json trace of the run to `log_dir`.
    pub dump_trace: bool,
    /// Directory for dumped data. Defaults to `./log/`.
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            only: String::new(),
            width: None,
            keep_going: false,
            verbose: false,
            dump_trace: false,
            log_dir: PathBuf::from("./log/"),
        }
    }
}

impl Config {
    /// Loads the configuration for the current directory and environment, then applies `args`.
    pub fn load<I, S>(args: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Loader::discover()?.load(args)
    }

    /// Whether a group called `name` of width `width` is selected by `only` and `width`.
    pub fn is_selected(&self, name: &str, width: Width) -> bool {
        name.contains(&self.only) && self.width.is_none_or(|w| w == width)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown shiftck option: `{0}`")]
    UnknownFlag(String),
    #[error("incorrect value for shiftck option `{key}` - `{reason}`")]
    InvalidFlag { key: String, reason: &'static str },
    #[error("unexpected argument `{0}`, options are passed as `-S<key>[=<value>]`")]
    UnexpectedArg(String),
    #[error(transparent)]
    Source(#[from] config::ConfigError),
    #[error("cannot locate configuration file: {0}")]
    Io(#[from] std::io::Error),
}

/// Builds a [`Config`] out of its layers.
pub struct Loader {
    file: Option<PathBuf>,
    env: Option<Environment>,
}

impl Default for Loader {
    fn default() -> Self {
        Loader { file: None, env: Some(Environment::with_prefix(ENV_PREFIX).ignore_empty(true)) }
    }
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    /// A loader reading the configuration file found from the current directory, if any.
    pub fn discover() -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir()?;
        Ok(Loader { file: config_path(&cwd), ..Self::default() })
    }

    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    pub fn without_env(mut self) -> Self {
        self.env = None;
        self
    }

    pub fn load<I, S>(self, args: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let defaults = Config::default();
        let mut builder = config::Config::builder()
            .set_default("only", defaults.only)?
            .set_default("keep_going", defaults.keep_going)?
            .set_default("verbose", defaults.verbose)?
            .set_default("dump_trace", defaults.dump_trace)?
            .set_default("log_dir", defaults.log_dir.to_string_lossy().into_owned())?;
        if let Some(file) = &self.file {
            builder = builder.add_source(File::from(file.as_path()).format(FileFormat::Toml));
        }
        if let Some(env) = self.env {
            builder = builder.add_source(env);
        }
        let mut config: Config = builder.build()?.try_deserialize()?;
        flags::apply(&mut config, args)?;
        Ok(config)
    }
}

/// Finds a configuration file in `dir` or one of its parents.
pub fn config_path(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|file| file.exists())
}
