// Keyword classifier - decides whether a text blob belongs to the target set
//
// Exclusion keywords are checked first and always win. Category assignment is
// independent of acceptance: ordered rules, first match wins.

use serde::{Deserialize, Serialize};

/// One keyword group mapped to a category label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub label: String,
    pub keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new(label: &str, keywords: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Result of classifying one text blob
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub accepted: bool,
    pub category: String,
}

/// Stateless keyword classifier; keywords are lowercased once at construction
#[derive(Debug, Clone)]
pub struct Classifier {
    include: Vec<String>,
    exclude: Vec<String>,
    rules: Vec<CategoryRule>,
    default_category: String,
}

impl Classifier {
    pub fn new(
        include: &[String],
        exclude: &[String],
        rules: &[CategoryRule],
        default_category: &str,
    ) -> Self {
        Self {
            include: lowercase_all(include),
            exclude: lowercase_all(exclude),
            rules: rules
                .iter()
                .map(|r| CategoryRule {
                    label: r.label.clone(),
                    keywords: lowercase_all(&r.keywords),
                })
                .collect(),
            default_category: default_category.to_string(),
        }
    }

    pub fn classify(&self, text: &str) -> Verdict {
        let lowered = text.to_lowercase();
        Verdict {
            accepted: self.accepts_lowered(&lowered),
            category: self.category_lowered(&lowered),
        }
    }

    pub fn accepts(&self, text: &str) -> bool {
        self.accepts_lowered(&text.to_lowercase())
    }

    pub fn category(&self, text: &str) -> String {
        self.category_lowered(&text.to_lowercase())
    }

    fn accepts_lowered(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        if contains_any(text, &self.exclude) {
            return false;
        }
        contains_any(text, &self.include)
    }

    fn category_lowered(&self, text: &str) -> String {
        self.rules
            .iter()
            .find(|rule| contains_any(text, &rule.keywords))
            .map(|rule| rule.label.clone())
            .unwrap_or_else(|| self.default_category.clone())
    }
}

fn lowercase_all(words: &[String]) -> Vec<String> {
    words
        .iter()
        .map(|w| w.to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

fn contains_any(text: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| text.contains(k.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn classifier() -> Classifier {
        Classifier::new(
            &strings(&["explained", "Tutorial", "news"]),
            &strings(&["free bitcoin", "Guaranteed Profit"]),
            &[
                CategoryRule::new("Crypto News", &["news", "today"]),
                CategoryRule::new("Crypto Education", &["tutorial", "explained"]),
            ],
            "Crypto General",
        )
    }

    #[test]
    fn empty_text_is_rejected() {
        let verdict = classifier().classify("");
        assert!(!verdict.accepted);
        assert_eq!(verdict.category, "Crypto General");
    }

    #[test]
    fn inclusion_is_case_insensitive() {
        let verdict = classifier().classify("Bitcoin EXPLAINED in 60 seconds");
        assert!(verdict.accepted);
        assert_eq!(verdict.category, "Crypto Education");
    }

    #[test]
    fn exclusion_dominates_inclusion() {
        let verdict = classifier().classify("Tutorial: get FREE BITCOIN now");
        assert!(!verdict.accepted);
        // category is still computed
        assert_eq!(verdict.category, "Crypto Education");
    }

    #[test]
    fn no_inclusion_keyword_is_rejected() {
        assert!(!classifier().accepts("just vibes"));
    }

    #[test]
    fn first_matching_rule_wins() {
        assert_eq!(
            classifier().category("news: bitcoin explained"),
            "Crypto News"
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let c = classifier();
        let text = "crypto news today, guaranteed profit explained";
        assert_eq!(c.classify(text), c.classify(text));
        assert!(!c.classify(text).accepted);
    }
}
