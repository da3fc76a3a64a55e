use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use wikipress_engine::{ConvertOptions, LinkResolver, LinkTarget};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("{count} cross-link(s) configured without a namespace")]
    LinksWithoutNamespace { count: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Space key that resolved cross-links point into.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub code_language: String,
    pub frontmatter_window: usize,
    pub export_dir: PathBuf,
    /// Cross-link key to target page. Kept last so it serializes as tables
    /// after the plain values.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub links: BTreeMap<String, LinkTarget>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: None,
            code_language: ConvertOptions::DEFAULT_CODE_LANGUAGE.to_string(),
            frontmatter_window: ConvertOptions::DEFAULT_FRONTMATTER_WINDOW,
            export_dir: PathBuf::from("output"),
            links: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.export_dir = Self::expand_path(&config.export_dir).unwrap_or(config.export_dir);

        log::debug!(
            "Loaded config from {} ({} cross-links)",
            config_path.display(),
            config.links.len()
        );
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/wikipress");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// The cross-link table bundled with its namespace.
    ///
    /// `None` without a namespace. Links configured without one are rejected
    /// rather than silently ignored.
    pub fn link_resolver(&self) -> Result<Option<LinkResolver>, ConfigError> {
        let Some(namespace) = &self.namespace else {
            if self.links.is_empty() {
                return Ok(None);
            }
            return Err(ConfigError::LinksWithoutNamespace {
                count: self.links.len(),
            });
        };

        let mut resolver = LinkResolver::new(namespace.as_str());
        resolver.extend(self.links.clone());
        Ok(Some(resolver))
    }

    pub fn convert_options(&self) -> Result<ConvertOptions, ConfigError> {
        Ok(ConvertOptions {
            links: self.link_resolver()?,
            code_language: self.code_language.clone(),
            frontmatter_window: self.frontmatter_window,
        })
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
