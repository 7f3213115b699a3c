use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::{defaults, envconfig::EnvConfig, validate};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub logging: LoggingConfig,
    pub auth: AuthConfig,
    pub data: DataConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        <Self as EnvConfig>::from_env()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.general.host, self.general.port)
    }
}

impl EnvConfig for AppConfig {
    fn validate(&self) -> Result<()> {
        validate::validate(self)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    pub host: String,
    pub port: u16,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            host: defaults::DEFAULT_HOST.to_string(),
            port: defaults::DEFAULT_PORT as u16,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub rust_log: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            rust_log: defaults::DEFAULT_RUST_LOG.to_string(),
        }
    }
}

/// Operator account, session storage and token settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub admin_id: String,
    pub admin_email: String,
    pub admin_name: String,
    pub admin_password: String,
    pub storage_dir: String,
    pub delay_ms: u64,
    pub token_ttl_secs: u64,
    pub cookie_secure: bool,
}

impl AuthConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn storage_path(&self) -> PathBuf {
        PathBuf::from(&self.storage_dir)
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: defaults::DEFAULT_JWT_SECRET.to_string(),
            admin_id: defaults::DEFAULT_ADMIN_ID.to_string(),
            admin_email: defaults::DEFAULT_ADMIN_EMAIL.to_string(),
            admin_name: defaults::DEFAULT_ADMIN_NAME.to_string(),
            admin_password: defaults::DEFAULT_ADMIN_PASSWORD.to_string(),
            storage_dir: defaults::DEFAULT_STORAGE_DIR.to_string(),
            delay_ms: defaults::DEFAULT_AUTH_DELAY_MS as u64,
            token_ttl_secs: defaults::DEFAULT_TOKEN_TTL_SECS as u64,
            cookie_secure: defaults::DEFAULT_COOKIE_SECURE,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    pub stub_delay_ms: u64,
}

impl DataConfig {
    pub fn stub_delay(&self) -> Duration {
        Duration::from_millis(self.stub_delay_ms)
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            stub_delay_ms: defaults::DEFAULT_STUB_DELAY_MS as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_match_the_demo_operator() {
        let cfg = AppConfig::default();

        assert_eq!(cfg.auth.admin_email, "admin@example.com");
        assert_eq!(cfg.auth.admin_password, "password");
        assert_eq!(cfg.auth.admin_name, "Admin User");
        assert_eq!(cfg.auth.delay(), Duration::from_millis(1000));
        assert_eq!(cfg.data.stub_delay(), Duration::from_millis(500));
        assert_eq!(cfg.bind_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn loads_sections_from_toml_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp config file");
        writeln!(
            file,
            "[general]\nport = 4100\n\n[auth]\nadmin_name = \"Night Shift\"\ndelay_ms = 0\n\n[data]\nstub_delay_ms = 0"
        )
        .expect("write config");

        let cfg = <AppConfig as EnvConfig>::load(Some(file.path())).expect("config should load");

        assert_eq!(cfg.general.port, 4100);
        assert_eq!(cfg.auth.admin_name, "Night Shift");
        assert_eq!(cfg.auth.admin_email, "admin@example.com");
        assert_eq!(cfg.auth.delay_ms, 0);
        assert_eq!(cfg.data.stub_delay_ms, 0);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp config file");
        writeln!(file, "[auth]\nadmin_nickname = \"nope\"").expect("write config");

        assert!(<AppConfig as EnvConfig>::load(Some(file.path())).is_err());
    }
}
