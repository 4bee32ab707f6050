#![allow(clippy::module_name_repetitions)]

use serde::Deserialize;
use std::{
    env::{self, VarError},
    fs, io,
    path::Path,
    time::Duration,
};
use thiserror::Error;
use url::Url;

const DEFAULT_LOOKUP_URL: &str = "https://api.tikmate.app/api/lookup";

#[derive(Deserialize, Clone, Debug)]
pub struct ServerConfig {
    pub host: Box<str>,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    pub fn get_address(&self) -> String {
        format!("{host}:{port}", host = self.host, port = self.port)
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct LookupConfig {
    #[serde(default = "LookupConfig::default_url")]
    pub url: Url,
    #[serde(default = "LookupConfig::default_timeout")]
    pub timeout: u64,
}

impl LookupConfig {
    fn default_url() -> Url {
        Url::parse(DEFAULT_LOOKUP_URL).expect("default lookup url is valid")
    }

    const fn default_timeout() -> u64 {
        20
    }

    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            url: Self::default_url(),
            timeout: Self::default_timeout(),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct ConverterConfig {
    #[serde(default)]
    pub url: Option<Url>,
    #[serde(default = "ConverterConfig::default_timeout")]
    pub timeout: u64,
}

impl ConverterConfig {
    const fn default_timeout() -> u64 {
        120
    }

    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout: Self::default_timeout(),
        }
    }
}

#[derive(Default, Deserialize, Clone, Debug)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub converter: ConverterConfig,
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error(transparent)]
    IO(#[from] io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error("`CONVERTER_API` is not a valid URL: {0}")]
    ConverterUrl(#[from] url::ParseError),
    #[error("`{0}` env variable is not a valid UTF-8 string")]
    NotUnicode(&'static str),
}

fn get_path() -> Result<Box<str>, ParseError> {
    match env::var("CONFIG_PATH") {
        Ok(val) => Ok(val.into_boxed_str()),
        Err(VarError::NotPresent) => Ok("config.toml".into()),
        Err(VarError::NotUnicode(_)) => Err(ParseError::NotUnicode("CONFIG_PATH")),
    }
}

/// Reads the config file if it exists, otherwise starts from defaults.
pub fn parse_from_fs(path: impl AsRef<Path>) -> Result<Config, ParseError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(err) => return Err(err.into()),
    };
    let cfg = toml::from_str(&raw)?;
    Ok(cfg)
}

/// Empty value disables conversion even if the file configures a converter.
fn apply_converter_override(cfg: &mut Config, raw: Option<&str>) -> Result<(), ParseError> {
    match raw.map(str::trim) {
        None => {}
        Some("") => cfg.converter.url = None,
        Some(raw) => cfg.converter.url = Some(Url::parse(raw)?),
    }
    Ok(())
}

#[allow(clippy::missing_errors_doc)]
pub fn read_config_from_env() -> Result<Config, ParseError> {
    let mut cfg = parse_from_fs(&*get_path()?)?;

    let converter_api = match env::var("CONVERTER_API") {
        Ok(val) => Some(val),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(_)) => return Err(ParseError::NotUnicode("CONVERTER_API")),
    };
    apply_converter_override(&mut cfg, converter_api.as_deref())?;

    Ok(cfg)
}
