use std::{collections::BTreeMap, fmt, sync::Arc};

use serde::{Deserialize, Serialize};

use super::{
    category::Category,
    composite::CompositePattern,
    vocabulary::{is_capitalized, Vocabulary},
};
use crate::{
    config::ClassifierConfig,
    error::{ConfigurationError, DecodeError},
};

/// Unit in which [`MatchRange`] offsets are reported.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OffsetUnit {
    /// Unicode scalar values.
    #[default]
    Char,
    /// UTF-16 code units.
    Utf16,
    /// UTF-8 bytes.
    Byte,
}

impl OffsetUnit {
    fn measure(&self, text: &str) -> usize {
        match self {
            OffsetUnit::Char => text.chars().count(),
            OffsetUnit::Utf16 => text.chars().map(char::len_utf16).sum(),
            OffsetUnit::Byte => text.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchRange {
    pub start: usize,
    pub length: usize,
}

impl MatchRange {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

impl fmt::Display for MatchRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "start: {}, length: {}", self.start, self.length)
    }
}

/// Category to ranges, ranges in order of appearance.
///
/// Every active category is a key, with an empty list when nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassificationResult {
    ranges: BTreeMap<Category, Vec<MatchRange>>,
}

impl ClassificationResult {
    fn with_categories(categories: &[Category]) -> Self {
        Self {
            ranges: categories.iter().map(|&c| (c, Vec::new())).collect(),
        }
    }

    /// Ranges for `category`, `None` when the category is not active.
    pub fn ranges(&self, category: Category) -> Option<&[MatchRange]> {
        self.ranges.get(&category).map(Vec::as_slice)
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.ranges.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[MatchRange])> + '_ {
        self.ranges.iter().map(|(c, r)| (*c, r.as_slice()))
    }

    /// Every range across categories, sorted by start.
    pub fn spans(&self) -> Vec<(Category, MatchRange)> {
        let mut spans: Vec<_> = self
            .ranges
            .iter()
            .flat_map(|(category, ranges)| ranges.iter().map(|range| (*category, *range)))
            .collect();
        spans.sort_by_key(|(_, range)| range.start);
        spans
    }

    /// Total number of ranges.
    pub fn len(&self) -> usize {
        self.ranges.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_inner(self) -> BTreeMap<Category, Vec<MatchRange>> {
        self.ranges
    }
}

type ExceptionRule = Arc<dyn Fn(&str) -> bool + Send + Sync>;

pub struct ClassifierBuilder {
    config: ClassifierConfig,
    exception_rule: ExceptionRule,
}

impl fmt::Debug for ClassifierBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassifierBuilder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for ClassifierBuilder {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}

impl ClassifierBuilder {
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            config,
            exception_rule: Arc::new(is_capitalized),
        }
    }

    pub fn vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.config.vocabulary = vocabulary;
        self
    }

    pub fn categories<I>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = Category>,
    {
        self.config.categories = categories.into_iter().collect();
        self
    }

    pub fn offset_unit(mut self, offset_unit: OffsetUnit) -> Self {
        self.config.offset_unit = offset_unit;
        self
    }

    /// Decides which built-in names are exceptions; the rest are function names.
    pub fn exception_rule<F>(mut self, rule: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.exception_rule = Arc::new(rule);
        self
    }

    pub fn build(self) -> Result<Classifier, ConfigurationError> {
        let rule = self.exception_rule;
        let partitioned = self.config.vocabulary.partition(|name| rule(name))?;
        let composite = CompositePattern::build(self.config.categories.iter().copied(), &partitioned)?;
        Ok(Classifier {
            composite,
            offset_unit: self.config.offset_unit,
        })
    }
}

/// Lexical classifier for one category set and vocabulary.
///
/// Immutable once built; share it freely across threads.
#[derive(Debug, Clone)]
pub struct Classifier {
    composite: CompositePattern,
    offset_unit: OffsetUnit,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Result<Self, ConfigurationError> {
        ClassifierBuilder::new(config).build()
    }

    pub fn builder() -> ClassifierBuilder {
        ClassifierBuilder::default()
    }

    /// All categories over the bundled Python vocabulary.
    pub fn python() -> Result<Self, ConfigurationError> {
        Self::new(ClassifierConfig::default())
    }

    pub fn composite(&self) -> &CompositePattern {
        &self.composite
    }

    pub fn offset_unit(&self) -> OffsetUnit {
        self.offset_unit
    }

    /// Decodes `bytes` as UTF-8, then classifies.
    #[tracing::instrument(level = "debug", skip(self, bytes), fields(len = bytes.len()))]
    pub fn classify_bytes(&self, bytes: &[u8]) -> Result<ClassificationResult, DecodeError> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            let error = DecodeError::from(e);
            tracing::error!("{}", error);
            error
        })?;
        Ok(self.classify(text))
    }

    #[tracing::instrument(level = "debug", skip(self, text), fields(len = text.len()))]
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let mut result = ClassificationResult::with_categories(self.composite.categories());
        let Some(regex) = self.composite.regex() else {
            return result;
        };

        let mut cursor = OffsetCursor::new(text, self.offset_unit);
        for captures in regex.captures_iter(text) {
            let Some(matched) = captures.get(0) else {
                continue;
            };
            if matched.is_empty() {
                tracing::warn!(offset = matched.start(), "skipping zero-length match");
                continue;
            }
            let Some(category) = self.composite.winning_category(&captures) else {
                continue;
            };

            let start = cursor.advance_to(matched.start());
            let end = cursor.advance_to(matched.end());
            let range = MatchRange::new(start, end - start);
            tracing::trace!(%category, %range, "match");

            if let Some(ranges) = result.ranges.get_mut(&category) {
                ranges.push(range);
            }
        }

        result
    }
}

/// Converts monotonically increasing byte offsets into the configured unit.
struct OffsetCursor<'a> {
    text: &'a str,
    unit: OffsetUnit,
    byte: usize,
    offset: usize,
}

impl<'a> OffsetCursor<'a> {
    fn new(text: &'a str, unit: OffsetUnit) -> Self {
        Self {
            text,
            unit,
            byte: 0,
            offset: 0,
        }
    }

    fn advance_to(&mut self, byte: usize) -> usize {
        debug_assert!(byte >= self.byte);
        self.offset += self.unit.measure(&self.text[self.byte..byte]);
        self.byte = byte;
        self.offset
    }
}
