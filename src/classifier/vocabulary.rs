use std::collections::HashSet;

use nom::{
    bytes::complete::{take_while, take_while1},
    combinator::{all_consuming, recognize},
    error::{context, VerboseError},
    sequence::pair,
    IResult,
};
use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::error::ConfigurationError;

/// Reserved words and built-in names of the classified language.
///
/// Both lists are ordered; order is kept through the partition so the
/// generated alternations are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(default)]
    pub reserved_words: Vec<String>,
    #[serde(default)]
    pub builtin_names: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::python()
    }
}

impl Vocabulary {
    pub fn new<R, B, S>(reserved_words: R, builtin_names: B) -> Self
    where
        R: IntoIterator<Item = S>,
        B: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reserved_words: reserved_words.into_iter().map(Into::into).collect(),
            builtin_names: builtin_names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            reserved_words: Vec::new(),
            builtin_names: Vec::new(),
        }
    }

    /// Python 3 keywords and the public names of its `builtins` module.
    pub fn python() -> Self {
        Self::new(
            PYTHON_RESERVED_WORDS.iter().copied(),
            PYTHON_BUILTIN_NAMES.iter().copied(),
        )
    }

    /// Splits the vocabulary into the three whole-word groups.
    ///
    /// Reserved words become keywords. Built-ins starting with `_` are dropped;
    /// the rest go to exceptions when `is_exception` holds and to function names
    /// otherwise. A name lands in at most one group.
    #[tracing::instrument(level = "debug", skip(self, is_exception))]
    pub fn partition<F>(&self, is_exception: F) -> Result<PartitionedVocabulary, ConfigurationError>
    where
        F: Fn(&str) -> bool,
    {
        let mut seen = HashSet::new();
        let mut partitioned = PartitionedVocabulary::default();

        for word in &self.reserved_words {
            validate_identifier(Category::Keyword, word)?;
            if seen.insert(word.as_str()) {
                partitioned.keywords.push(word.clone());
            }
        }

        for name in &self.builtin_names {
            if name.starts_with('_') {
                continue;
            }
            let category = if is_exception(name) {
                Category::Exception
            } else {
                Category::FunctionName
            };
            validate_identifier(category, name)?;
            if !seen.insert(name.as_str()) {
                continue;
            }
            match category {
                Category::Exception => partitioned.exceptions.push(name.clone()),
                _ => partitioned.function_names.push(name.clone()),
            }
        }

        tracing::debug!(
            keywords = partitioned.keywords.len(),
            exceptions = partitioned.exceptions.len(),
            function_names = partitioned.function_names.len(),
            "vocabulary partitioned"
        );
        Ok(partitioned)
    }
}

/// Default exception rule: built-in names starting with an uppercase letter.
pub fn is_capitalized(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionedVocabulary {
    pub keywords: Vec<String>,
    pub exceptions: Vec<String>,
    pub function_names: Vec<String>,
}

impl PartitionedVocabulary {
    pub fn words(&self, category: Category) -> &[String] {
        match category {
            Category::Keyword => &self.keywords,
            Category::Exception => &self.exceptions,
            Category::FunctionName => &self.function_names,
            _ => &[],
        }
    }
}

/// `\b(?:w1|w2|...)\b`, or `None` for an empty group.
pub fn whole_word_pattern(words: &[String]) -> Option<String> {
    if words.is_empty() {
        return None;
    }
    let alternation = words
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|");
    Some(format!(r"\b(?:{})\b", alternation))
}

type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

fn parse_identifier(input: &str) -> ParserResult<&str> {
    context(
        "identifier",
        recognize(pair(
            take_while1(|c: char| c.is_alphabetic() || c == '_'),
            take_while(|c: char| c.is_alphanumeric() || c == '_'),
        )),
    )(input)
}

fn validate_identifier(category: Category, word: &str) -> Result<(), ConfigurationError> {
    if word.is_empty() {
        tracing::error!(%category, "empty identifier in vocabulary");
        return Err(ConfigurationError::EmptyIdentifier { category });
    }
    all_consuming(parse_identifier)(word)
        .map(|_| ())
        .map_err(|_| {
            tracing::error!(%category, word, "invalid identifier in vocabulary");
            ConfigurationError::InvalidIdentifier {
                category,
                word: word.to_string(),
            }
        })
}

pub const PYTHON_RESERVED_WORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

pub const PYTHON_BUILTIN_NAMES: &[&str] = &[
    "ArithmeticError",
    "AssertionError",
    "AttributeError",
    "BaseException",
    "BaseExceptionGroup",
    "BlockingIOError",
    "BrokenPipeError",
    "BufferError",
    "BytesWarning",
    "ChildProcessError",
    "ConnectionAbortedError",
    "ConnectionError",
    "ConnectionRefusedError",
    "ConnectionResetError",
    "DeprecationWarning",
    "EOFError",
    "Ellipsis",
    "EncodingWarning",
    "EnvironmentError",
    "Exception",
    "ExceptionGroup",
    "False",
    "FileExistsError",
    "FileNotFoundError",
    "FloatingPointError",
    "FutureWarning",
    "GeneratorExit",
    "IOError",
    "ImportError",
    "ImportWarning",
    "IndentationError",
    "IndexError",
    "InterruptedError",
    "IsADirectoryError",
    "KeyError",
    "KeyboardInterrupt",
    "LookupError",
    "MemoryError",
    "ModuleNotFoundError",
    "NameError",
    "None",
    "NotADirectoryError",
    "NotImplemented",
    "NotImplementedError",
    "OSError",
    "OverflowError",
    "PendingDeprecationWarning",
    "PermissionError",
    "ProcessLookupError",
    "RecursionError",
    "ReferenceError",
    "ResourceWarning",
    "RuntimeError",
    "RuntimeWarning",
    "StopAsyncIteration",
    "StopIteration",
    "SyntaxError",
    "SyntaxWarning",
    "SystemError",
    "SystemExit",
    "TabError",
    "TimeoutError",
    "True",
    "TypeError",
    "UnboundLocalError",
    "UnicodeDecodeError",
    "UnicodeEncodeError",
    "UnicodeError",
    "UnicodeTranslateError",
    "UnicodeWarning",
    "UserWarning",
    "ValueError",
    "Warning",
    "ZeroDivisionError",
    "__build_class__",
    "__debug__",
    "__doc__",
    "__import__",
    "__loader__",
    "__name__",
    "__package__",
    "__spec__",
    "abs",
    "aiter",
    "all",
    "anext",
    "any",
    "ascii",
    "bin",
    "bool",
    "breakpoint",
    "bytearray",
    "bytes",
    "callable",
    "chr",
    "classmethod",
    "compile",
    "complex",
    "copyright",
    "credits",
    "delattr",
    "dict",
    "dir",
    "divmod",
    "enumerate",
    "eval",
    "exec",
    "exit",
    "filter",
    "float",
    "format",
    "frozenset",
    "getattr",
    "globals",
    "hasattr",
    "hash",
    "help",
    "hex",
    "id",
    "input",
    "int",
    "isinstance",
    "issubclass",
    "iter",
    "len",
    "license",
    "list",
    "locals",
    "map",
    "max",
    "memoryview",
    "min",
    "next",
    "object",
    "oct",
    "open",
    "ord",
    "pow",
    "print",
    "property",
    "quit",
    "range",
    "repr",
    "reversed",
    "round",
    "set",
    "setattr",
    "slice",
    "sorted",
    "staticmethod",
    "str",
    "sum",
    "super",
    "tuple",
    "type",
    "vars",
    "zip",
];
