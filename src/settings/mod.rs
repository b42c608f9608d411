//! Loading of the `db.*` settings.
//!
//! Values come from an optional TOML file with a `[db]` table, overridden by
//! `ACH_DB_PLATFORM`, `ACH_DB_URL`, `ACH_DB_USERNAME` and `ACH_DB_PASSWORD`.

use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use tracing::debug;

use crate::error::Result;
use crate::models::{redact_url, DbSettings};

pub const ENV_PREFIX: &str = "ACH";
pub const SECTION: &str = "db";

impl DbSettings {
    /// Reads settings from `file` and the environment, environment winning.
    ///
    /// Passing `Some(vars)` as `env` replaces the process environment with
    /// `vars`, keyed the same way (`ACH_DB_URL`, ...).
    pub fn from_sources(
        file: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = file {
            debug!("Loading database settings from: {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("_")
                .source(env),
        );

        let settings: DbSettings = builder.build()?.get(SECTION)?;
        debug!(
            platform = %settings.platform,
            url = %redact_url(&settings.url),
            "database settings loaded"
        );
        Ok(settings)
    }

    /// Like [`DbSettings::from_sources`] with the process environment, after
    /// picking up a `.env` file from the working directory or one of its
    /// parents if there is one.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        Self::load_with_env_file(None, file)
    }

    /// Reads `env_file` (or the nearest `.env` when `None`) and layers the
    /// process environment over it. Variables already set in the process
    /// win. The process environment itself is left untouched, so a `.env`
    /// file that fails to parse is never partly applied.
    pub fn load_with_env_file(env_file: Option<&Path>, file: Option<&Path>) -> Result<Self> {
        let mut vars: config::Map<String, String> =
            read_env_file(env_file)?.into_iter().collect();
        vars.extend(std::env::vars_os().filter_map(|(key, value)| {
            Some((key.into_string().ok()?, value.into_string().ok()?))
        }));
        Self::from_sources(file, Some(vars))
    }
}

/// Parses a dotenv file without touching the process environment.
///
/// A missing file yields no variables. Any other failure, including a single
/// malformed line, is [`crate::error::DataSourceError::Env`].
pub fn read_env_file(path: Option<&Path>) -> Result<Vec<(String, String)>> {
    let iter = match path {
        Some(path) => dotenvy::from_path_iter(path),
        None => dotenvy::from_filename_iter(".env"),
    };

    let iter = match iter {
        Ok(iter) => iter,
        Err(e) if e.not_found() => {
            debug!("no .env file found");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let vars = iter.collect::<std::result::Result<Vec<_>, _>>()?;
    debug!(count = vars.len(), "read .env file");
    Ok(vars)
}
