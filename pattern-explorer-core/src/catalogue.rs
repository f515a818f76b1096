// pattern catalogue module - the compiled-in categories and pattern entries

use anyhow::{bail, ensure, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;

mod solid;

/// the before/after code pair shown in a card's detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatternExample {
    pub before: &'static str,
    pub after: &'static str,
    pub explanation: &'static str,
}

/// one design pattern record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatternEntry {
    /// unique within its category, used as the entry's identifier
    pub name: &'static str,
    pub description: &'static str,
    pub example: PatternExample,
}

/// a named, ordered group of pattern entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    #[serde(rename = "category")]
    pub name: &'static str,
    #[serde(rename = "patterns")]
    pub entries: &'static [PatternEntry],
}

static CATALOGUE: &[Category] = &[Category {
    name: "SOLID Principles",
    entries: solid::SOLID_PRINCIPLES,
}];

/// the full catalogue, in display order
pub fn catalogue() -> &'static [Category] {
    CATALOGUE
}

impl PatternEntry {
    pub fn slug(&self) -> String {
        slug(self.name)
    }
}

/// derive a lowercase, hyphen-separated identifier from a display name
pub fn slug(name: &str) -> String {
    lazy_static! {
        static ref NON_ALNUM: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
    }

    let lowered = name.to_lowercase();
    NON_ALNUM
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// check the catalogue invariants, reporting the first violation
pub fn validate(categories: &[Category]) -> Result<()> {
    for category in categories {
        ensure!(!category.name.trim().is_empty(), "category with an empty name");

        let mut seen = HashSet::new();
        for entry in category.entries {
            ensure!(
                !entry.name.trim().is_empty(),
                "category '{}' has an entry with an empty name",
                category.name
            );
            if !seen.insert(entry.name) {
                bail!(
                    "category '{}' has more than one entry named '{}'",
                    category.name,
                    entry.name
                );
            }

            let example = &entry.example;
            for (field, value) in [
                ("before", example.before),
                ("after", example.after),
                ("explanation", example.explanation),
            ] {
                ensure!(
                    !value.trim().is_empty(),
                    "'{}' in category '{}' has an empty {} field",
                    entry.name,
                    category.name,
                    field
                );
            }
        }
    }
    Ok(())
}

/// look an entry up by display name (any case) or by slug
pub fn find<'a>(categories: &'a [Category], query: &str) -> Option<(&'a Category, &'a PatternEntry)> {
    let query = query.trim();
    let wanted = slug(query);
    categories.iter().find_map(|category| {
        category
            .entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(query) || entry.slug() == wanted)
            .map(|entry| (category, entry))
    })
}

/// like `find`, but an unknown query is an error listing what is available
pub fn resolve<'a>(categories: &'a [Category], query: &str) -> Result<(&'a Category, &'a PatternEntry)> {
    match find(categories, query) {
        Some(found) => Ok(found),
        None => {
            let available: Vec<String> = categories
                .iter()
                .flat_map(|category| category.entries.iter().map(PatternEntry::slug))
                .collect();
            bail!(
                "no pattern named '{}' (available: {})",
                query,
                available.join(", ")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static DUPLICATED: &[PatternEntry] = &[
        PatternEntry {
            name: "Strategy",
            description: "swap algorithms",
            example: PatternExample {
                before: "if a:\n    pass",
                after: "strategy.run()",
                explanation: "delegates to a strategy",
            },
        },
        PatternEntry {
            name: "Strategy",
            description: "again",
            example: PatternExample {
                before: "x = 1",
                after: "x = 2",
                explanation: "same name twice",
            },
        },
    ];

    static EMPTY_AFTER: &[PatternEntry] = &[PatternEntry {
        name: "Observer",
        description: "notify subscribers",
        example: PatternExample {
            before: "poll()",
            after: "   ",
            explanation: "push instead of poll",
        },
    }];

    #[test]
    fn shipped_catalogue_is_valid() {
        validate(catalogue()).unwrap();
    }

    #[test]
    fn shipped_catalogue_has_the_solid_principles_in_order() {
        let categories = catalogue();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "SOLID Principles");

        let names: Vec<&str> = categories[0].entries.iter().map(|e| e.name).collect();
        assert_eq!(
            names,
            [
                "Single Responsibility Principle",
                "Open/Closed Principle",
                "Liskov Substitution Principle",
                "Interface Segregation Principle",
                "Dependency Inversion Principle",
            ]
        );
    }

    #[test]
    fn code_keeps_whitespace_only_lines() {
        let (_, entry) = find(catalogue(), "Single Responsibility Principle").unwrap();
        assert!(entry.example.before.contains("self.db = Database()\n    \n"));
        assert!(entry.example.after.starts_with("class UserRepository:"));
    }

    #[test]
    fn validate_rejects_duplicate_names() {
        let categories = [Category { name: "Behavioural", entries: DUPLICATED }];
        let err = validate(&categories).unwrap_err();
        assert!(err.to_string().contains("more than one entry named 'Strategy'"));
    }

    #[test]
    fn validate_rejects_blank_code() {
        let categories = [Category { name: "Behavioural", entries: EMPTY_AFTER }];
        let err = validate(&categories).unwrap_err();
        assert!(err.to_string().contains("empty after field"));
    }

    #[test]
    fn validate_rejects_unnamed_category() {
        let categories = [Category { name: "", entries: EMPTY_AFTER }];
        assert!(validate(&categories).is_err());
    }

    #[test]
    fn slug_collapses_punctuation() {
        assert_eq!(slug("Open/Closed Principle"), "open-closed-principle");
        assert_eq!(slug("  Single Responsibility Principle "), "single-responsibility-principle");
        assert_eq!(slug("***"), "");
    }

    #[test]
    fn find_accepts_names_and_slugs() {
        for entry in catalogue()[0].entries {
            let (category, by_slug) = find(catalogue(), &entry.slug()).unwrap();
            assert_eq!(category.name, "SOLID Principles");
            assert_eq!(by_slug.name, entry.name);

            let (_, by_name) = find(catalogue(), &entry.name.to_uppercase()).unwrap();
            assert_eq!(by_name.name, entry.name);
        }
        assert!(find(catalogue(), "singleton").is_none());
    }

    #[test]
    fn resolve_lists_available_slugs() {
        let err = resolve(catalogue(), "singleton").unwrap_err().to_string();
        assert!(err.contains("no pattern named 'singleton'"));
        assert!(err.contains("liskov-substitution-principle"));
    }

    #[test]
    fn serialises_with_original_keys() {
        let json = serde_json::to_value(catalogue()).unwrap();
        let first = &json[0];
        assert_eq!(first["category"], "SOLID Principles");
        assert_eq!(first["patterns"][1]["name"], "Open/Closed Principle");
        assert!(first["patterns"][0]["example"]["after"]
            .as_str()
            .unwrap()
            .contains("class UserRepository:"));
    }
}
