//! reposhowcase - Categorized GitHub Repository Showcase Generator
//!
//! reposhowcase fetches a GitHub user's repositories, classifies each one into
//! a topical category and splices a categorized markdown listing into the
//! marker-delimited region of a profile README.
//!
//! ## Core Features
//!
//! - **GitHub Integration**: Paginated repository listing via the REST API
//! - **Rule-Based Classification**: Ordered topic, language and keyword tiers
//! - **Markdown Rendering**: Star-sorted category sections with badges
//! - **Idempotent Splicing**: README rewritten only when content changes
//! - **Configuration Management**: YAML-based configuration with XDG compliance
//!
//! ## Modules
//!
//! - [`config`]: Configuration management and parsing
//! - [`github`]: Repository fetching and filtering
//! - [`classify`]: Category rules and the classification cascade
//! - [`render`]: Markdown fragment rendering
//! - [`splice`]: Marker-delimited README region replacement
//! - [`showcase`]: Pipeline orchestration

pub mod classify;
pub mod config;
pub mod github;
pub mod render;
pub mod showcase;
pub mod splice;

pub use classify::{classify, Category};
pub use config::Config;
pub use github::{GitHubClient, Repo};
pub use render::render_showcase;
pub use showcase::{RunOutcome, RunSummary, ShowcaseEngine};
pub use splice::{splice, SpliceError, SpliceOutcome};
