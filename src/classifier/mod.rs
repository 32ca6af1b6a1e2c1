//! # Lexical Classifier
//!
//! Classifies ranges of source text into lexical categories for syntax
//! coloring: docstrings, strings, numbers, comments, reserved words, built-in
//! exception names and built-in callable names.
//!
//! ## Design Principles
//!
//! * **One pass**: every active category contributes one named alternative to a
//!   single regex, which is scanned over the text once, left to right.
//! * **Precedence by position**: alternatives are ordered by [`Category`];
//!   at a given offset the earliest one that matches wins, so a triple-quoted
//!   block is never split into plain strings.
//! * **Open literals are results, not errors**: an unterminated docstring runs
//!   to end of text, an unterminated string to end of line.
//! * **Injected vocabulary**: reserved words and built-in names come from a
//!   [`Vocabulary`]; the split between exceptions and function names is a
//!   replaceable predicate.
//!
//! ## Component Structure
//!
//! * [`category`]: the closed set of categories and their precedence
//! * [`patterns`]: rules that do not depend on a vocabulary
//! * [`vocabulary`]: vocabulary validation, partition and the Python preset
//! * [`composite`]: building the ordered alternation
//! * [`scan`]: the scan loop, offsets and the classification result
//!
//! ## Usage Example
//!
//! ```rust
//! use lexicolor::classifier::{Category, Classifier, Vocabulary};
//!
//! fn classify_example() -> Result<(), Box<dyn std::error::Error>> {
//!     let classifier = Classifier::builder()
//!         .vocabulary(Vocabulary::new(["if", "else"], ["ValueError", "len"]))
//!         .build()?;
//!
//!     let result = classifier.classify("if len(x): raise ValueError");
//!     let keywords = result.ranges(Category::Keyword).unwrap_or_default();
//!     assert_eq!(keywords[0].start, 0);
//!     assert_eq!(keywords[0].length, 2);
//!     Ok(())
//! }
//! # classify_example().unwrap();
//! ```

pub mod category;
pub mod composite;
pub mod patterns;
pub mod scan;
pub mod vocabulary;

#[cfg(test)]
mod tests;

pub use category::Category;
pub use composite::{CompositePattern, PatternPart};
pub use scan::{ClassificationResult, Classifier, ClassifierBuilder, MatchRange, OffsetUnit};
pub use vocabulary::{is_capitalized, PartitionedVocabulary, Vocabulary};
