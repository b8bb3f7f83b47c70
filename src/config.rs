//! Runtime settings, read from environment variables with defaults rooted in
//! a dot-directory under the user's home.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use directories::BaseDirs;

use crate::console::StopAnswer;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".movie-catalog";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "catalog.sqlite";
const LOG_DIR_NAME: &str = "logs";
const DEFAULT_LOG_LEVEL: &str = "info";

pub const DB_PATH_VAR: &str = "MOVIE_CATALOG_DB";
pub const LOG_DIR_VAR: &str = "MOVIE_CATALOG_LOG_DIR";
pub const LOG_LEVEL_VAR: &str = "MOVIE_CATALOG_LOG";
pub const STOP_ANSWER_VAR: &str = "MOVIE_CATALOG_STOP_ANSWER";
pub const STOP_IGNORE_CASE_VAR: &str = "MOVIE_CATALOG_STOP_IGNORE_CASE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    /// `flexi_logger` level spec, e.g. `info` or `movie_catalog=debug`.
    pub log_level: String,
    pub stop_answer: StopAnswer,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source. The home directory
    /// is only resolved when a path variable is missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = match lookup(DB_PATH_VAR) {
            Some(path) => PathBuf::from(path),
            None => data_dir()?.join(DB_FILE_NAME),
        };
        let log_dir = match lookup(LOG_DIR_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => data_dir()?.join(LOG_DIR_NAME),
        };
        let log_level = lookup(LOG_LEVEL_VAR).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let ignore_case = match lookup(STOP_IGNORE_CASE_VAR) {
            Some(raw) => parse_flag(STOP_IGNORE_CASE_VAR, &raw)?,
            None => false,
        };
        let stop_text = lookup(STOP_ANSWER_VAR);
        let stop_answer = match (stop_text, ignore_case) {
            (None, false) => StopAnswer::default(),
            (None, true) => StopAnswer::ignoring_case(StopAnswer::default().text()),
            (Some(text), false) => StopAnswer::exact(text),
            (Some(text), true) => StopAnswer::ignoring_case(text),
        };

        Ok(Self {
            db_path,
            log_dir,
            log_level,
            stop_answer,
        })
    }
}

/// Resolve the application data directory inside the user's home.
fn data_dir() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME))
}

fn parse_flag(var: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("{var} must be a boolean flag, got `{other}`"),
    }
}
