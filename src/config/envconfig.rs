use std::path::{Path, PathBuf};

use ::config as config_rs;
use anyhow::{Context, Result};
use config_rs::{ConfigBuilder, builder::DefaultState};
use serde::de::DeserializeOwned;

/// Layered loader: optional config file first, then `APP_*` environment overrides.
pub trait EnvConfig: Sized + DeserializeOwned {
    const PREFIX: &'static str = "APP";
    const SEPARATOR: &'static str = "__";
    const FILE_VAR: &'static str = "FOOD_ADMIN_CONFIG";

    fn load_dotenv() {
        // crate root .env wins over the working directory one
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        let _ = dotenvy::from_filename(manifest_dir.join(".env")).or_else(|_| dotenvy::dotenv());
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn config_file() -> Option<PathBuf> {
        std::env::var_os(Self::FILE_VAR).map(PathBuf::from)
    }

    fn builder(file: Option<&Path>) -> ConfigBuilder<DefaultState> {
        let mut builder = config_rs::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config_rs::File::from(path).required(true));
        }
        builder.add_source(
            config_rs::Environment::with_prefix(Self::PREFIX)
                .prefix_separator("_")
                .separator(Self::SEPARATOR)
                .try_parsing(true),
        )
    }

    fn from_env() -> Result<Self> {
        Self::load_dotenv();
        let file = Self::config_file();
        Self::load(file.as_deref())
    }

    fn load(file: Option<&Path>) -> Result<Self> {
        let settings = Self::builder(file).build().with_context(|| match file {
            Some(path) => format!("failed to read config file {}", path.display()),
            None => "failed to read environment variables for config".to_string(),
        })?;

        let cfg = settings
            .try_deserialize::<Self>()
            .context("failed to deserialize config")?;

        cfg.validate()?;
        Ok(cfg)
    }
}
