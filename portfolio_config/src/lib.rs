use std::{
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{File, FileFormat};
use portfolio_models::catalog::Catalog;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon separated list of config files, later files take precedence.
pub const CONFIG_PATHS_ENV: &str = "PORTFOLIO_CONFIG";

/// Returns the config files listed in `PORTFOLIO_CONFIG`, or `config.toml` in
/// the working directory if the variable is not set.
pub fn paths_from_env() -> Vec<PathBuf> {
    match std::env::var_os(CONFIG_PATHS_ENV) {
        Some(paths) => std::env::split_paths(&paths).collect(),
        None => vec![PathBuf::from("config.toml")],
    }
}

pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

/// Reads the portfolio data served by the catalog endpoints.
pub fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file at {}", path.display()))?;
    config::Config::builder()
        .add_source(File::from_str(&content, FileFormat::Toml))
        .build()?
        .try_deserialize()
        .with_context(|| format!("Failed to load catalog from {}", path.display()))
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub contact: ContactConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize)]
pub struct CorsConfig {
    /// Origins allowed to call the api from a browser. `*` allows any origin.
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".into()],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    /// Append-only file receiving one line per contact form submission.
    pub log_path: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct CatalogConfig {
    pub path: PathBuf,
}
