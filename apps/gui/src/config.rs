use crate::app::AppConfig;
use crate::error::{Result, bail, error};
use crate::ui::UiConfig;
use ::config::{AppStrategy, constants as config_constants, create_strategy, resolve_dir};
use serde::Deserialize;
use session::SessionSettings;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub ui: UiConfig,
    pub service: ServiceConfig,

    // === System state ===
    pub config_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// Where the search service listens
    pub base_url: String,
    /// Hits requested per search; pagination happens locally
    pub result_limit: usize,
    pub page_size: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: config_constants::DEFAULT_SERVICE_URL.to_string(),
            result_limit: config_constants::DEFAULT_RESULT_LIMIT,
            page_size: config_constants::DEFAULT_PAGE_SIZE,
        }
    }
}

impl ServiceConfig {
    pub fn url(&self) -> Result<api::Url> {
        match api::Url::parse(&self.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(url),
            Ok(url) => bail!("unsupported scheme `{}` in base-url", url.scheme()),
            Err(e) => bail!("invalid base-url `{}`: {e}", self.base_url),
        }
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            page_size: self.page_size,
            result_limit: self.result_limit,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            bail!("`page-size` must be greater than 0");
        }
        if self.result_limit == 0 {
            bail!("`result-limit` must be greater than 0");
        }
        Ok(())
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
struct RawConfig {
    app: AppConfig,
    ui: UiConfig,
    service: ServiceConfig,
}

impl Config {
    fn from_raw(raw: RawConfig, config_path: PathBuf) -> Result<Self> {
        raw.service.validate()?;

        Ok(Self {
            app: raw.app,
            ui: raw.ui,
            service: raw.service,
            config_path,
        })
    }

    fn default_config_path() -> Result<PathBuf> {
        let strategy = create_strategy().map_err(|_| error!("Home dir not found"))?;

        Ok(
            resolve_dir(config_constants::ENV_CONFIG_DIRECTORY, &strategy, |s| {
                Some(s.config_dir())
            })
            .join(config_constants::GUI_CONFIG_FILE_NAME),
        )
    }

    /// Load the configuration file. A missing file means defaults.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_config_path()?,
        };

        let raw_config: RawConfig = match std::fs::read_to_string(&config_path) {
            Ok(content) => toml::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => RawConfig::default(),
            Err(e) => return Err(e.into()),
        };

        Self::from_raw(raw_config, config_path)
    }

    #[cfg(test)]
    pub fn load_str(config_str: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(config_str)?;
        Self::from_raw(raw, Self::default_config_path()?)
    }

    /// Command line and environment take precedence over the file.
    pub fn override_base_url(&mut self, base_url: Option<String>) {
        if let Some(base_url) = base_url {
            self.service.base_url = base_url;
        }
    }
}
