//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["roulette.toml", ".roulette.toml"];
const ENV_PREFIX: &str = "ROULETTE_";

/// One place configuration may come from, as reported by `config`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub label: &'static str,
    pub location: String,
    pub found: bool,
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path,
        )?
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Layer the file sources over the defaults.
    ///
    /// Missing global or project files are skipped; a missing explicit file
    /// is an error.
    fn figment(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<Figment, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project].into_iter().flatten() {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            figment = figment.merge(Toml::file(path));
        }

        Ok(figment)
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/lunch-roulette/config.toml if set,
    /// otherwise the platform config dir equivalent
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("lunch-roulette").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe every source in priority order, highest first
    pub fn config_sources(explicit: Option<&Path>) -> Vec<ConfigSource> {
        let mut sources = Vec::new();

        if let Some(path) = explicit {
            sources.push(ConfigSource {
                label: "Explicit",
                location: path.display().to_string(),
                found: path.exists(),
            });
        }

        sources.push(match Self::project_config_path() {
            Some(path) => ConfigSource {
                label: "Project",
                location: path.display().to_string(),
                found: true,
            },
            None => ConfigSource {
                label: "Project",
                location: PROJECT_FILES.map(|f| format!("./{}", f)).join(" or "),
                found: false,
            },
        });

        if let Some(path) = Self::global_config_path() {
            sources.push(ConfigSource {
                label: "Global",
                found: path.exists(),
                location: path.display().to_string(),
            });
        }

        sources.push(ConfigSource {
            label: "Default",
            location: "built-in defaults".to_string(),
            found: true,
        });

        sources
    }
}
