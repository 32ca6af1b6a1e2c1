use std::collections::BTreeSet;

use regex::{Captures, Regex};

use super::{
    category::Category,
    patterns::static_pattern,
    vocabulary::{whole_word_pattern, PartitionedVocabulary},
};
use crate::error::ConfigurationError;

/// One alternative of the composite pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternPart {
    pub category: Category,
    pub pattern: String,
}

/// Ordered alternation of named category patterns, compiled once.
///
/// Alternatives appear in [`Category`] order and the regex engine uses
/// leftmost-first semantics, so at any offset the earliest category whose
/// rule matches wins.
#[derive(Debug, Clone)]
pub struct CompositePattern {
    categories: Vec<Category>,
    parts: Vec<PatternPart>,
    regex: Option<Regex>,
}

impl CompositePattern {
    /// Builds the alternation for `categories` (order and duplicates ignored).
    ///
    /// A vocabulary category whose word list is empty contributes no
    /// alternative but stays in [`categories`](Self::categories).
    #[tracing::instrument(level = "debug", skip(categories, vocabulary))]
    pub fn build<I>(
        categories: I,
        vocabulary: &PartitionedVocabulary,
    ) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = Category>,
    {
        let categories: Vec<Category> = categories
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let parts: Vec<PatternPart> = categories
            .iter()
            .filter_map(|&category| {
                let pattern = match static_pattern(category) {
                    Some(pattern) => Some(pattern.to_string()),
                    None => whole_word_pattern(vocabulary.words(category)),
                };
                pattern.map(|pattern| PatternPart { category, pattern })
            })
            .collect();

        let regex = if parts.is_empty() {
            None
        } else {
            let source = parts
                .iter()
                .map(|part| format!("(?P<{}>{})", part.category.group_name(), part.pattern))
                .collect::<Vec<_>>()
                .join("|");
            let regex = Regex::new(&source).map_err(|e| {
                tracing::error!("failed to compile composite pattern: {}", e);
                ConfigurationError::from(e)
            })?;
            Some(regex)
        };

        tracing::debug!(
            categories = ?categories,
            alternatives = parts.len(),
            "composite pattern built"
        );

        Ok(Self {
            categories,
            parts,
            regex,
        })
    }

    /// Active categories in precedence order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Alternatives that made it into the regex, in precedence order.
    pub fn parts(&self) -> &[PatternPart] {
        &self.parts
    }

    /// `None` when no category contributes an alternative.
    pub fn regex(&self) -> Option<&Regex> {
        self.regex.as_ref()
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_ref().map_or("", Regex::as_str)
    }

    /// Category of the alternative that produced `captures`.
    pub fn winning_category(&self, captures: &Captures<'_>) -> Option<Category> {
        self.parts
            .iter()
            .map(|part| part.category)
            .find(|category| captures.name(category.group_name()).is_some())
    }
}
