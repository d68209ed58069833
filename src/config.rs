use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub server: ServerConfig,
}

/// Where the form sends its requests
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    pub base_url: String,
    /// Unset means the transport's own defaults apply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

/// The bundled prediction service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub artifacts_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                base_url: DEFAULT_SERVICE_URL.to_string(),
                timeout_seconds: None,
            },
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5000,
                artifacts_dir: "artifacts".to_string(),
            },
        }
    }
}

/// Load configuration from defaults, an optional file and `HOME_PRICE__*` env vars.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    load_config_with_env(path, env_source())
}

fn env_source() -> config::Environment {
    config::Environment::with_prefix("HOME_PRICE").separator("__")
}

fn load_config_with_env(path: &Path, env: config::Environment) -> anyhow::Result<Config> {
    let defaults = Config::default();

    let config = config::Config::builder()
        .set_default("service.base_url", defaults.service.base_url)?
        .set_default("server.host", defaults.server.host)?
        .set_default("server.port", i64::from(defaults.server.port))?
        .set_default("server.artifacts_dir", defaults.server.artifacts_dir)?
        .add_source(config::File::from(path).required(false))
        .add_source(env)
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    let url = cfg.service.base_url.as_str();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!("service.base_url must start with http:// or https://, got '{}'", url);
    }

    if cfg.service.timeout_seconds == Some(0) {
        anyhow::bail!("service.timeout_seconds must be greater than 0");
    }

    if cfg.server.host.parse::<std::net::IpAddr>().is_err() {
        anyhow::bail!("server.host '{}' is not a valid IP address", cfg.server.host);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::HashMap, io::Write};

    #[test]
    fn test_defaults_without_file() {
        let cfg = load_config(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(cfg.service.base_url, DEFAULT_SERVICE_URL);
        assert_eq!(cfg.service.timeout_seconds, None);
        assert_eq!(cfg.server.port, 5000);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[service]\nbase_url = \"http://10.0.0.5:8000\"\ntimeout_seconds = 15\n\n[server]\nport = 9000"
        )
        .unwrap();

        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.service.base_url, "http://10.0.0.5:8000");
        assert_eq!(cfg.service.timeout_seconds, Some(15));
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.host, "127.0.0.1");
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[service]\nbase_url = \"http://10.0.0.5:8000\"").unwrap();

        let vars = HashMap::from([(
            "HOME_PRICE__SERVICE__BASE_URL".to_string(),
            "http://10.0.0.9:7000".to_string(),
        )]);
        let cfg = load_config_with_env(file.path(), env_source().source(Some(vars))).unwrap();
        assert_eq!(cfg.service.base_url, "http://10.0.0.9:7000");
        assert_eq!(cfg.server.port, 5000);
    }

    #[test]
    fn test_env_value_is_validated() {
        let vars = HashMap::from([(
            "HOME_PRICE__SERVICE__BASE_URL".to_string(),
            "ftp://10.0.0.9".to_string(),
        )]);
        let result = load_config_with_env(
            Path::new("does-not-exist.toml"),
            env_source().source(Some(vars)),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut cfg = Config::default();
        cfg.service.base_url = "127.0.0.1:5000".to_string();

        let result = validate_config(&cfg);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("http://"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut cfg = Config::default();
        cfg.service.timeout_seconds = Some(0);
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_host() {
        let mut cfg = Config::default();
        cfg.server.host = "not-an-ip".to_string();
        assert!(validate_config(&cfg).is_err());
    }
}
