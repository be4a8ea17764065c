use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use shellexpand;
use std::path::{Path, PathBuf};

/// Main configuration structure for reposhowcase
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Path to the README file containing the showcase markers
    #[serde(default = "default_readme_path")]
    pub readme_path: String,

    /// GitHub account and listing settings
    #[serde(default)]
    pub github: GitHubConfig,

    /// Marker lines delimiting the auto-generated region
    #[serde(default)]
    pub markers: MarkerConfig,
}

/// GitHub configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GitHubConfig {
    /// GitHub username whose repositories are showcased
    pub username: Option<String>,

    /// Base URL of the GitHub REST API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Number of repositories requested per listing page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Include forked repositories
    #[serde(default)]
    pub include_forks: bool,

    /// Include archived repositories
    #[serde(default)]
    pub include_archived: bool,

    /// Repository exclusion patterns
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

/// Marker configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MarkerConfig {
    /// Line marking the start of the auto-generated region
    #[serde(default = "default_start_marker")]
    pub start: String,

    /// Line marking the end of the auto-generated region
    #[serde(default = "default_end_marker")]
    pub end: String,
}

// Default value functions
fn default_readme_path() -> String {
    "README.md".to_string()
}
fn default_api_url() -> String {
    "https://api.github.com".to_string()
}
fn default_page_size() -> usize {
    100
}
fn default_timeout() -> u64 {
    30
}
fn default_start_marker() -> String {
    "<!-- REPOS-START -->".to_string()
}
fn default_end_marker() -> String {
    "<!-- REPOS-END -->".to_string()
}

// Default implementations
impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            username: None,
            api_url: default_api_url(),
            page_size: default_page_size(),
            timeout: default_timeout(),
            include_forks: false,
            include_archived: false,
            exclude_patterns: Vec::new(),
        }
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            start: default_start_marker(),
            end: default_end_marker(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            readme_path: default_readme_path(),
            github: GitHubConfig::default(),
            markers: MarkerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location or create a default config
    pub fn load_or_default() -> Result<Self> {
        let config_path = Self::default_config_path()?;

        if config_path.exists() {
            Self::load(&config_path)
        } else {
            // Create default config
            let config = Self::default();

            // Create config directory if it doesn't exist
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
            }

            // Save default config
            config.save(&config_path)?;

            tracing::info!("Created default configuration at: {:?}", config_path);
            Ok(config)
        }
    }

    /// Load configuration from a specific file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let mut config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        // Expand environment variables in paths
        config.expand_paths()?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }

    /// Get the default configuration file path (XDG compliant)
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = config_dir().context("Failed to get user config directory")?;

        Ok(config_dir.join("reposhowcase").join("config.yml"))
    }

    /// Expand environment variables in configuration paths
    pub fn expand_paths(&mut self) -> Result<()> {
        self.readme_path = shellexpand::full(&self.readme_path)
            .context("Failed to expand readme_path")?
            .into_owned();

        Ok(())
    }

    /// The configured username, or an error pointing at the config file
    pub fn username(&self) -> Result<&str> {
        self.github
            .username
            .as_deref()
            .filter(|u| !u.is_empty())
            .context(
                "github.username is not set. Run 'reposhowcase init --username <name>' or edit the config file.",
            )
    }
}
