use serde::{Deserialize, Serialize};

/// Lexical class a span of text can be tagged with.
///
/// Variant order is the precedence order of the composite pattern: when two
/// rules could match at the same offset, the earlier variant wins.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
pub enum Category {
    Docstring,
    String,
    Number,
    Comment,
    Keyword,
    Exception,
    #[strum(to_string = "Function name", serialize = "FunctionName")]
    #[serde(rename = "Function name", alias = "FunctionName")]
    FunctionName,
}

impl Category {
    /// Capture group name used inside the composite regex.
    pub fn group_name(&self) -> &'static str {
        match self {
            Category::Docstring => "Docstring",
            Category::String => "String",
            Category::Number => "Number",
            Category::Comment => "Comment",
            Category::Keyword => "Keyword",
            Category::Exception => "Exception",
            Category::FunctionName => "FunctionName",
        }
    }

    /// True for the categories generated from an external vocabulary.
    pub fn is_vocabulary(&self) -> bool {
        matches!(
            self,
            Category::Keyword | Category::Exception | Category::FunctionName
        )
    }
}
