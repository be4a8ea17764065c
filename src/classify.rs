//! Rule-based repository classification
//!
//! Every repository maps to exactly one [`Category`] through a fixed priority
//! cascade: owner-assigned topics first, then languages that identify a
//! category on their own, then keyword tiers over the combined name and
//! description text, then language-family fallbacks, and finally `Other`.

use crate::github::Repo;

/// One showcase category label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    AiRag,
    BlockchainDefi,
    Rust,
    WebFrontend,
    Learning,
    PythonTools,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::AiRag => "AI/RAG",
            Category::BlockchainDefi => "Blockchain/DeFi",
            Category::Rust => "Rust",
            Category::WebFrontend => "Web/Frontend",
            Category::Learning => "Learning",
            Category::PythonTools => "Python Tools",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification rules for one category
struct CategoryRule {
    category: Category,
    topics: &'static [&'static str],
    keywords: &'static [&'static str],
    languages: &'static [&'static str],
}

/// Rule entries in declaration order
///
/// The topic and language scans walk this table top-to-bottom, so earlier
/// entries win ties.
const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::AiRag,
        topics: &["ai", "rag", "llm", "agent", "ml", "machine-learning", "nlp", "chatbot"],
        keywords: &["ai", "agent", "rag", "chatbot", "llm", "ml", "gpt", "openai", "langchain"],
        languages: &[],
    },
    CategoryRule {
        category: Category::BlockchainDefi,
        topics: &["blockchain", "defi", "web3", "solidity", "ethereum", "smart-contracts", "nft"],
        keywords: &[
            "defi", "dao", "amm", "nft", "dapp", "crowdsale", "foundry", "token", "swap", "stake",
            "lottery", "loteria", "bank", "market", "blockchain", "contract", "solidity",
            "ethereum", "web3",
        ],
        languages: &["solidity", "vyper"],
    },
    CategoryRule {
        category: Category::Rust,
        topics: &["rust"],
        keywords: &["rust"],
        languages: &["rust"],
    },
    CategoryRule {
        category: Category::WebFrontend,
        topics: &["frontend", "web", "react", "nextjs", "typescript"],
        keywords: &["frontend", "web", "react", "next", "vue", "angular"],
        languages: &[],
    },
    CategoryRule {
        category: Category::Learning,
        topics: &["learning", "course", "tutorial", "bootcamp", "education"],
        keywords: &["bootcamp", "course", "aoc", "learning", "tutorial", "awesome"],
        languages: &[],
    },
    CategoryRule {
        category: Category::PythonTools,
        topics: &["python", "cli", "tool", "utility"],
        keywords: &[],
        languages: &["python"],
    },
];

/// Categories in the order their sections appear in the rendered showcase
pub const DISPLAY_ORDER: &[Category] = &[
    Category::AiRag,
    Category::BlockchainDefi,
    Category::PythonTools,
    Category::WebFrontend,
    Category::Rust,
    Category::Learning,
];

/// Languages treated as the Python family
const PYTHON_FAMILY: &[&str] = &["python", "jupyter notebook"];

/// Languages treated as the web ecosystem
const WEB_FAMILY: &[&str] = &["typescript", "javascript"];

/// Language precondition for accepting a keyword tier
enum LanguageGate {
    /// Any language, including none
    Any,
    /// No language, or one of the listed languages
    EmptyOrIn(&'static [&'static str]),
}

impl LanguageGate {
    fn admits(&self, language: &str) -> bool {
        match self {
            LanguageGate::Any => true,
            LanguageGate::EmptyOrIn(list) => language.is_empty() || list.contains(&language),
        }
    }
}

/// One keyword tier: a category whose keywords are checked, plus its gate
struct KeywordTier {
    category: Category,
    gate: LanguageGate,
}

/// Keyword tiers in hand-picked priority order
///
/// Blockchain/DeFi outranks AI/RAG for mixed matches. The AI and Web tiers
/// only fire when the repository language doesn't contradict them, so a Rust
/// repo mentioning "web" in its description isn't pulled into Web/Frontend.
const KEYWORD_TIERS: &[KeywordTier] = &[
    KeywordTier {
        category: Category::BlockchainDefi,
        gate: LanguageGate::Any,
    },
    KeywordTier {
        category: Category::AiRag,
        gate: LanguageGate::EmptyOrIn(PYTHON_FAMILY),
    },
    KeywordTier {
        category: Category::Learning,
        gate: LanguageGate::Any,
    },
    KeywordTier {
        category: Category::WebFrontend,
        gate: LanguageGate::EmptyOrIn(WEB_FAMILY),
    },
];

fn rules_for(category: Category) -> Option<&'static CategoryRule> {
    CATEGORY_RULES.iter().find(|rule| rule.category == category)
}

/// Classify a repository into exactly one category
///
/// Total and deterministic: every repository gets a label, falling back to
/// [`Category::Other`]. All comparisons are case-insensitive; keyword matching
/// is substring containment over the combined name and description text.
pub fn classify(repo: &Repo) -> Category {
    let name = repo.name.to_lowercase();
    let description = repo.description.as_deref().unwrap_or("").to_lowercase();
    let language = repo.language.as_deref().unwrap_or("").to_lowercase();
    let topics: Vec<String> = repo.topics.iter().map(|t| t.to_lowercase()).collect();
    let searchable = format!("{} {}", name, description);

    // 1. Topics are the strongest signal
    for rule in CATEGORY_RULES {
        if rule.topics.iter().any(|t| topics.iter().any(|topic| topic == t)) {
            return rule.category;
        }
    }

    // 2. Languages that identify a category on their own
    for rule in CATEGORY_RULES {
        if rule.languages.contains(&language.as_str())
            && matches!(rule.category, Category::BlockchainDefi | Category::Rust)
        {
            return rule.category;
        }
    }

    // 3. Keyword tiers over the combined name + description text
    for tier in KEYWORD_TIERS {
        if !tier.gate.admits(&language) {
            continue;
        }
        if let Some(rule) = rules_for(tier.category) {
            if rule.keywords.iter().any(|kw| searchable.contains(kw)) {
                return tier.category;
            }
        }
    }

    // 4. Language-family fallbacks
    if PYTHON_FAMILY.contains(&language.as_str()) {
        return Category::PythonTools;
    }
    if WEB_FAMILY.contains(&language.as_str()) {
        return Category::WebFrontend;
    }

    // 5. Everything else
    Category::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, description: Option<&str>, language: Option<&str>, topics: &[&str]) -> Repo {
        Repo {
            name: name.to_string(),
            description: description.map(str::to_string),
            language: language.map(str::to_string),
            url: format!("https://github.com/testuser/{name}"),
            topics: topics.iter().map(|t| t.to_string()).collect(),
            is_fork: false,
            is_archived: false,
            stars: 0,
            updated_at: None,
        }
    }

    #[test]
    fn test_every_displayed_category_has_rules() {
        for category in DISPLAY_ORDER {
            assert!(
                rules_for(*category).is_some(),
                "no rule entry for displayed category {}",
                category
            );
        }
    }

    #[test]
    fn test_keyword_match_on_name() {
        // Name contains "rag", no language, so the AI tier accepts it
        let r = repo("rag-chatbot", Some("A demo"), None, &[]);
        assert_eq!(classify(&r), Category::AiRag);
    }

    #[test]
    fn test_topic_beats_language() {
        let r = repo("some-project", None, Some("Python"), &["rust"]);
        assert_eq!(classify(&r), Category::Rust);
    }

    #[test]
    fn test_topic_beats_keywords() {
        // Keywords point at Blockchain/DeFi but the topic wins
        let r = repo("token-swap", Some("an AMM dapp"), None, &["learning"]);
        assert_eq!(classify(&r), Category::Learning);
    }

    #[test]
    fn test_language_fallback_web() {
        let r = repo("my-notes", None, Some("TypeScript"), &[]);
        assert_eq!(classify(&r), Category::WebFrontend);
    }

    #[test]
    fn test_language_fallback_python() {
        let r = repo("scratchpad", None, Some("Python"), &[]);
        assert_eq!(classify(&r), Category::PythonTools);
    }

    #[test]
    fn test_jupyter_counts_as_python_family() {
        let r = repo("experiments", None, Some("Jupyter Notebook"), &[]);
        assert_eq!(classify(&r), Category::PythonTools);
    }

    #[test]
    fn test_language_match_restricted_subset() {
        // Solidity and Rust identify their categories from language alone
        let solidity = repo("hello", None, Some("Solidity"), &[]);
        assert_eq!(classify(&solidity), Category::BlockchainDefi);

        let rust = repo("hello", None, Some("Rust"), &[]);
        assert_eq!(classify(&rust), Category::Rust);

        // Python is not in the restricted subset, it only reaches the
        // fallback after the keyword tiers
        let python = repo("gpt-helper", None, Some("Python"), &[]);
        assert_eq!(classify(&python), Category::AiRag);
    }

    #[test]
    fn test_blockchain_keywords_outrank_ai_keywords() {
        // Text matches both tiers; Blockchain/DeFi is checked first
        let r = repo("ai-token", Some("an AI token tracker"), None, &[]);
        assert_eq!(classify(&r), Category::BlockchainDefi);
    }

    #[test]
    fn test_ai_tier_gated_on_language() {
        // Same text, incompatible language: the AI tier is skipped
        let java = repo("gpt-helper", None, Some("Java"), &[]);
        assert_eq!(classify(&java), Category::Other);

        // No language satisfies the gate
        let bare = repo("gpt-helper", None, None, &[]);
        assert_eq!(classify(&bare), Category::AiRag);
    }

    #[test]
    fn test_web_tier_gated_on_language() {
        // "web" in the description doesn't make a Go repo Web/Frontend
        let go = repo("server", Some("a web server"), Some("Go"), &[]);
        assert_eq!(classify(&go), Category::Other);

        let ts = repo("server", Some("a web server"), Some("TypeScript"), &[]);
        assert_eq!(classify(&ts), Category::WebFrontend);
    }

    #[test]
    fn test_keyword_substring_containment() {
        // "bank" matches inside "bankruptcy"; substring semantics are intended
        let r = repo("bankruptcy-parser", None, Some("Go"), &[]);
        assert_eq!(classify(&r), Category::BlockchainDefi);
    }

    #[test]
    fn test_case_insensitivity() {
        let lower = repo("defi-tool", Some("swap engine"), Some("solidity"), &["web3"]);
        let upper = repo("DEFI-TOOL", Some("SWAP ENGINE"), Some("Solidity"), &["WEB3"]);
        assert_eq!(classify(&lower), classify(&upper));
        assert_eq!(classify(&lower), Category::BlockchainDefi);
    }

    #[test]
    fn test_default_other() {
        let r = repo("dotfiles", Some("shell setup"), Some("Shell"), &[]);
        assert_eq!(classify(&r), Category::Other);
    }

    #[test]
    fn test_totality_over_field_combinations() {
        // classify never fails to produce a label, whatever the inputs
        let names = ["x", "rag-chatbot", "token", "awesome-list", ""];
        let descriptions = [None, Some(""), Some("a web course"), Some("nothing notable")];
        let languages = [None, Some("Rust"), Some("Python"), Some("TypeScript"), Some("COBOL")];
        let topic_sets: [&[&str]; 3] = [&[], &["rust"], &["unrelated-topic"]];

        for name in names {
            for description in descriptions {
                for language in languages {
                    for topics in topic_sets {
                        let r = repo(name, description, language, topics);
                        // as_str is defined for every variant, including Other
                        assert!(!classify(&r).as_str().is_empty());
                    }
                }
            }
        }
    }
}
