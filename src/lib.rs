//! # lexicolor: lexical classification for syntax coloring
//!
//! lexicolor takes raw source text and reports which ranges of it are
//! docstrings, strings, numbers, comments, reserved words, built-in exception
//! names and built-in callable names. It does not build a syntax tree or check
//! program correctness; characters that match no rule are simply absent from
//! the result.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Vocabulary → Partition → Composite Pattern → Scan → ClassificationResult
//! ```
//!
//! ### Stage 1: Configuration
//!
//! A [`config::ClassifierConfig`] selects the active categories, the
//! [`classifier::Vocabulary`] and the offset unit. It can be loaded from JSON.
//!
//! ### Stage 2: Building
//!
//! [`classifier::ClassifierBuilder`] partitions the vocabulary into keywords,
//! exceptions and function names and compiles one ordered alternation
//! ([`classifier::CompositePattern`]). Bad vocabulary is rejected here with a
//! [`ConfigurationError`].
//!
//! ### Stage 3: Scanning
//!
//! [`classifier::Classifier::classify`] runs the alternation over the text
//! once and attributes each match to the category whose alternative won.
//! Byte input goes through [`classifier::Classifier::classify_bytes`], which
//! fails with a [`DecodeError`] before scanning if the bytes are not UTF-8.
//!
//! ## Error Handling
//!
//! Both error kinds are terminal for the call that raised them; no partial
//! result is returned. Unterminated strings and docstrings are not errors.

pub mod classifier;
pub mod config;
pub mod error;

// Re-exports
pub use classifier::{Category, ClassificationResult, Classifier, MatchRange};
pub use error::*;
