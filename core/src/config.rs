use camino::{Utf8Path as Path, Utf8PathBuf as PathBuf};
use color_eyre::eyre::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct TomlDataDir {
    path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct TomlAuth {
    allowed_email: String,
    password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct TomlConfig {
    #[serde(rename = "DataDir")]
    pub data_dir: TomlDataDir,
    #[serde(rename = "Auth")]
    pub auth: TomlAuth,
    pub address: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// The single email allowed to use the dashboard.
    pub allowed_email: String,
    /// When None, any password passes for the allowed email (mock mode).
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: DataDir,
    pub auth: AuthConfig,
    pub address: Option<String>,
    pub port: Option<u16>,
}

pub async fn read_config(path: &Path) -> Result<Config> {
    let toml_str = tokio::fs::read_to_string(path)
        .await
        .context(format!("Error reading config file {}", path))?;
    let toml_config: TomlConfig = toml::from_str(&toml_str).context("Error parsing config file")?;
    let data_dir = DataDir {
        path: PathBuf::from(toml_config.data_dir.path),
    };
    let auth = AuthConfig {
        allowed_email: toml_config.auth.allowed_email,
        password: toml_config.auth.password,
    };
    Ok(Config {
        data_dir,
        auth,
        address: toml_config.address,
        port: toml_config.port,
    })
}
