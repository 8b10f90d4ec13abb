use std::{net::SocketAddr, path::Path};

use crate::server::error::config::ConfigError;

/// Address the server listens on when `BIND_ADDRESS` is unset
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
    /// TrueType font used for the shopping list PDF, built-in Helvetica when unset
    pub shopping_list_font_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            bind_address: parse_bind_address(optional_var("BIND_ADDRESS")?)?,
            shopping_list_font_path: check_font_path(optional_var("SHOPPING_LIST_FONT_PATH")?)?,
        })
    }
}

fn required_var(var: &'static str) -> Result<String, ConfigError> {
    optional_var(var)?.ok_or(ConfigError::MissingVar(var))
}

/// Reads a variable, treating an empty value the same as an unset one
fn optional_var(var: &'static str) -> Result<Option<String>, ConfigError> {
    match std::env::var(var) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(var)),
    }
}

fn parse_bind_address(value: Option<String>) -> Result<SocketAddr, ConfigError> {
    let value = value.unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

    value
        .parse()
        .map_err(|source| ConfigError::InvalidBindAddress { value, source })
}

/// Fails at startup rather than on the first shopping list download
fn check_font_path(path: Option<String>) -> Result<Option<String>, ConfigError> {
    match path {
        Some(path) if !Path::new(&path).is_file() => Err(ConfigError::FontNotFound(path)),
        path => Ok(path),
    }
}
