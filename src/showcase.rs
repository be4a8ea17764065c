//! Showcase Engine - Orchestrates the fetch, classify, render, splice pipeline
//!
//! This module provides the high-level orchestration that ties repository
//! fetching and filtering to classification, markdown rendering and the
//! README splice. Each run is a fresh computation over freshly fetched data.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use crate::classify::{classify, Category};
use crate::config::Config;
use crate::github::{GitHubClient, Repo};
use crate::render::render_showcase;
use crate::splice::{splice, SpliceOutcome};

/// Outcome of a showcase run
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// README rewritten with new content
    Updated,
    /// README already up to date, nothing written
    Unchanged,
    /// Dry run: the rendered markdown, nothing written
    Preview(String),
}

/// Results from a complete showcase run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Repositories returned by the listing endpoint
    pub fetched: usize,
    /// Repositories remaining after filtering
    pub kept: usize,
    /// Per-repository classification, in fetch order
    pub assignments: Vec<(String, Category)>,
    /// What happened to the README
    pub outcome: RunOutcome,
}

/// The engine driving a full showcase update
pub struct ShowcaseEngine {
    config: Arc<Config>,
    github: GitHubClient,
}

impl ShowcaseEngine {
    /// Create a new engine with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let github = GitHubClient::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            github,
        })
    }

    /// Run the full pipeline
    ///
    /// With `dry_run` the README is left alone and the rendered markdown is
    /// returned in the summary instead.
    pub async fn run(&self, dry_run: bool) -> Result<RunSummary> {
        info!("Starting showcase update for {}", self.github.username());

        let repositories = self
            .github
            .list_repositories()
            .await
            .context("Failed to fetch repositories")?;
        let fetched = repositories.len();

        let repositories = self.github.apply_filters(repositories, &self.config);
        let kept = repositories.len();
        debug!("{} of {} repositories kept after filtering", kept, fetched);

        let (assignments, categorized) = self.classify_all(repositories);

        let markdown = render_showcase(categorized);

        let outcome = if dry_run {
            RunOutcome::Preview(markdown)
        } else {
            let readme = Path::new(&self.config.readme_path);
            let spliced = splice(
                readme,
                &self.config.markers.start,
                &self.config.markers.end,
                &markdown,
            )
            .context("Failed to update README")?;

            match spliced {
                SpliceOutcome::Updated => {
                    info!("README updated: {}", self.config.readme_path);
                    RunOutcome::Updated
                }
                SpliceOutcome::Unchanged => {
                    info!("README already up to date: {}", self.config.readme_path);
                    RunOutcome::Unchanged
                }
            }
        };

        Ok(RunSummary {
            fetched,
            kept,
            assignments,
            outcome,
        })
    }

    /// Classify repositories and bucket them by category
    fn classify_all(
        &self,
        repositories: Vec<Repo>,
    ) -> (Vec<(String, Category)>, BTreeMap<Category, Vec<Repo>>) {
        let mut assignments = Vec::with_capacity(repositories.len());
        let mut categorized: BTreeMap<Category, Vec<Repo>> = BTreeMap::new();

        for repo in repositories {
            let category = classify(&repo);
            debug!("Classified {} as {}", repo.name, category);
            assignments.push((repo.name.clone(), category));
            categorized.entry(category).or_default().push(repo);
        }

        (assignments, categorized)
    }
}
