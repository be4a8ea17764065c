//! Markdown rendering for the categorized repository listing

use std::collections::BTreeMap;

use crate::classify::{Category, DISPLAY_ORDER};
use crate::github::Repo;

/// Maximum rendered description length, ellipsis included
const MAX_DESCRIPTION_LEN: usize = 100;

/// Language badge shown when GitHub reports no primary language
const LANGUAGE_PLACEHOLDER: &str = "Various";

/// Render the full showcase fragment for the given category buckets
///
/// Categories render in display order; empty buckets are skipped. Repositories
/// that fell through to [`Category::Other`] render under a trailing heading,
/// sorted by name only and without star badges.
pub fn render_showcase(mut categorized: BTreeMap<Category, Vec<Repo>>) -> String {
    let mut lines = vec![
        "## Repository Showcase".to_string(),
        String::new(),
        "*Auto-updated daily. Organized by primary focus area.*".to_string(),
        String::new(),
    ];

    for category in DISPLAY_ORDER {
        let Some(repos) = categorized.get_mut(category) else {
            continue;
        };
        if repos.is_empty() {
            continue;
        }

        // Stars descending, ties by case-insensitive name
        repos.sort_by(|a, b| {
            b.stars
                .cmp(&a.stars)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });

        lines.push(format!("### {}", category));
        lines.push(String::new());

        for repo in repos.iter() {
            let description = display_description(repo);
            let language = repo.language.as_deref().unwrap_or(LANGUAGE_PLACEHOLDER);
            let stars_badge = if repo.stars > 0 {
                format!(" ⭐ {}", repo.stars)
            } else {
                String::new()
            };

            lines.push(format!("- **[{}]({})** - {}", repo.name, repo.url, description));
            lines.push(format!("  `{}`{}", language, stars_badge));
            lines.push(String::new());
        }
    }

    // Unclassified repositories get a trailing section of their own
    if let Some(other_repos) = categorized.get_mut(&Category::Other) {
        if !other_repos.is_empty() {
            other_repos.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

            lines.push("### Other Projects".to_string());
            lines.push(String::new());

            for repo in other_repos.iter() {
                let description = display_description(repo);
                let language = repo.language.as_deref().unwrap_or(LANGUAGE_PLACEHOLDER);

                lines.push(format!("- **[{}]({})** - {}", repo.name, repo.url, description));
                lines.push(format!("  `{}`", language));
                lines.push(String::new());
            }
        }
    }

    lines.join("\n")
}

/// Description to display for a repository
///
/// An existing description is trimmed and truncated; a missing one is
/// generated from the repository name.
fn display_description(repo: &Repo) -> String {
    match repo.description.as_deref() {
        Some(desc) if !desc.is_empty() => truncate(desc.trim()),
        _ => {
            let spaced = repo.name.replace(['-', '_'], " ");
            format!("{} project", title_case(&spaced))
        }
    }
}

/// Truncate to [`MAX_DESCRIPTION_LEN`] characters, ellipsis included
fn truncate(desc: &str) -> String {
    if desc.chars().count() > MAX_DESCRIPTION_LEN {
        let head: String = desc.chars().take(MAX_DESCRIPTION_LEN - 3).collect();
        format!("{}...", head)
    } else {
        desc.to_string()
    }
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
