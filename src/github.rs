use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::env;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::Config;

/// A repository record as returned by the GitHub listing endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Repo {
    /// Repository name (unique per account)
    pub name: String,

    /// Free-text description, if the owner set one
    pub description: Option<String>,

    /// Primary language as detected by GitHub
    pub language: Option<String>,

    /// Canonical browser URL
    #[serde(rename = "html_url")]
    pub url: String,

    /// Owner-assigned topics
    #[serde(default)]
    pub topics: Vec<String>,

    /// Whether the repository is a fork
    #[serde(rename = "fork")]
    pub is_fork: bool,

    /// Whether the repository is archived
    #[serde(rename = "archived")]
    pub is_archived: bool,

    /// Stargazer count
    #[serde(rename = "stargazers_count")]
    pub stars: u32,

    /// Last update timestamp, used only for fetch ordering
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// GitHub client for the public repository listing endpoint
pub struct GitHubClient {
    http: reqwest::Client,
    api_url: String,
    username: String,
    page_size: usize,
    token: Option<String>,
}

impl GitHubClient {
    /// Create a new client for the configured account
    pub fn new(config: &Config) -> Result<Self> {
        let username = config.username()?.to_string();
        let token = Self::detect_token();

        if token.is_some() {
            debug!("Using GITHUB_TOKEN for authenticated requests");
        } else {
            debug!("No GITHUB_TOKEN set, using unauthenticated requests");
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("reposhowcase/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.github.timeout))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            api_url: config.github.api_url.trim_end_matches('/').to_string(),
            username,
            page_size: config.github.page_size,
            token,
        })
    }

    /// Read the optional bearer token from the environment
    fn detect_token() -> Option<String> {
        let token = env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty())?;

        if !token.starts_with("ghp_") && !token.starts_with("gho_") && !token.starts_with("ghs_") {
            warn!("GITHUB_TOKEN doesn't look like a valid GitHub token (should start with ghp_, gho_, or ghs_)");
        }

        Some(token)
    }

    /// The account whose repositories are listed
    pub fn username(&self) -> &str {
        &self.username
    }

    /// List all repositories for the configured account
    ///
    /// Pages through the listing endpoint sequentially, stopping when a page
    /// returns fewer records than the page size.
    pub async fn list_repositories(&self) -> Result<Vec<Repo>> {
        debug!("Fetching repositories for: {}", self.username);

        let mut repositories = Vec::new();
        let mut page = 1u32;

        loop {
            let items = self.fetch_page(page).await?;

            if items.is_empty() {
                break;
            }

            let count = items.len();
            repositories.extend(items);

            if count < self.page_size {
                break;
            }
            page += 1;
        }

        info!(
            "Found {} repositories for {}",
            repositories.len(),
            self.username
        );
        Ok(repositories)
    }

    /// Fetch a single listing page
    async fn fetch_page(&self, page: u32) -> Result<Vec<Repo>> {
        let url = format!("{}/users/{}/repos", self.api_url, self.username);

        let mut request = self.http.get(&url).query(&[
            ("per_page", self.page_size.to_string()),
            ("page", page.to_string()),
            ("sort", "updated".to_string()),
        ]);

        if let Some(token) = &self.token {
            request = request.header(reqwest::header::AUTHORIZATION, format!("token {token}"));
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to fetch repositories page {}", page))?;

        let response = response
            .error_for_status()
            .with_context(|| format!("GitHub API rejected repositories page {}", page))?;

        let repos: Vec<Repo> = response
            .json()
            .await
            .with_context(|| format!("Failed to parse repositories page {}", page))?;

        debug!("Page {} returned {} repositories", page, repos.len());
        Ok(repos)
    }

    /// Apply configuration filters to repositories
    pub fn apply_filters(&self, repositories: Vec<Repo>, config: &Config) -> Vec<Repo> {
        let mut filtered = Vec::new();

        for repo in repositories {
            // Skip if matches exclusion patterns
            if self.matches_exclusion_pattern(&repo.name, &config.github.exclude_patterns) {
                debug!("Excluding repository due to pattern match: {}", repo.name);
                continue;
            }

            // Skip forks if not included
            if repo.is_fork && !config.github.include_forks {
                debug!("Excluding fork repository: {}", repo.name);
                continue;
            }

            // Skip archived repositories if not included
            if repo.is_archived && !config.github.include_archived {
                debug!("Excluding archived repository: {}", repo.name);
                continue;
            }

            // Skip the profile repository itself
            if repo.name == self.username {
                debug!("Excluding profile repository: {}", repo.name);
                continue;
            }

            filtered.push(repo);
        }

        filtered
    }

    /// Check if repository name matches any exclusion pattern
    fn matches_exclusion_pattern(&self, name: &str, patterns: &[String]) -> bool {
        patterns.iter().any(|pattern| {
            // Simple glob pattern matching
            if pattern.contains('*') {
                let pattern_regex = pattern.replace('.', r"\.").replace('*', ".*");

                regex::Regex::new(&format!("^{}$", pattern_regex))
                    .map(|re| re.is_match(name))
                    .unwrap_or(false)
            } else {
                name == pattern
            }
        })
    }
}
