//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get an environment variable, falling back to `default` when unset.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    get_env(name).unwrap_or_else(|_| default.to_string())
}

/// Get and parse an environment variable.
pub fn get_env_parse<T: FromStr>(name: &'static str) -> Result<T, Error> {
    let val = get_env(name)?;
    val.parse::<T>().map_err(|_| Error::WrongFormat(name))
}

/// Parse an environment variable, falling back to `default` when unset.
///
/// A value that is set but malformed is still an error.
pub fn get_env_parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, Error> {
    match get_env_parse(name) {
        Err(Error::MissingEnv(_)) => Ok(default),
        other => other,
    }
}

/// Read a comma-separated list. Unset yields an empty list; blank items are dropped.
pub fn get_env_list(name: &'static str) -> Vec<String> {
    get_env(name)
        .map(|val| {
            val.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
