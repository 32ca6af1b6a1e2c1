
use pretty_assertions::assert_eq;

use super::*;

fn python() -> Classifier {
    Classifier::python().unwrap()
}

fn texts<'a>(text: &'a str, result: &ClassificationResult, category: Category) -> Vec<&'a str> {
    // offsets are characters; map them back through char_indices
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    result
        .ranges(category)
        .unwrap()
        .iter()
        .map(|r| &text[boundaries[r.start]..boundaries[r.end()]])
        .collect()
}

#[test]
fn test_python_source() {
    let text = r#"def area(r):
    """Area of a circle."""
    if r < 0:
        raise ValueError('negative radius')  # guard
    return 3.14159 * r ** 2
"#;
    let result = python().classify(text);

    assert_eq!(
        texts(text, &result, Category::Docstring),
        vec![r#""""Area of a circle.""""#]
    );
    assert_eq!(texts(text, &result, Category::String), vec!["'negative radius'"]);
    assert_eq!(texts(text, &result, Category::Comment), vec!["# guard"]);
    assert_eq!(texts(text, &result, Category::Number), vec!["0", "3.14159", "2"]);
    assert_eq!(
        texts(text, &result, Category::Keyword),
        vec!["def", "if", "raise", "return"]
    );
    assert_eq!(texts(text, &result, Category::Exception), vec!["ValueError"]);
    assert!(texts(text, &result, Category::FunctionName).is_empty());
}

#[test]
fn test_hash_inside_string_is_not_a_comment() {
    let text = "s = '# not a comment' # comment";
    let result = python().classify(text);
    assert_eq!(texts(text, &result, Category::String), vec!["'# not a comment'"]);
    assert_eq!(texts(text, &result, Category::Comment), vec!["# comment"]);
}

#[test]
fn test_quotes_inside_comment_are_not_strings() {
    let text = "# it's \"quoted\"\nx";
    let result = python().classify(text);
    assert_eq!(texts(text, &result, Category::Comment), vec!["# it's \"quoted\""]);
    assert!(texts(text, &result, Category::String).is_empty());
}

#[test]
fn test_docstring_swallows_everything_inside() {
    let text = "'''if 1: # x\n\"y\"'''";
    let result = python().classify(text);
    assert_eq!(texts(text, &result, Category::Docstring), vec![text]);
    assert_eq!(result.len(), 1);
}

#[test]
fn test_open_docstring_runs_to_end_of_text() {
    let text = "x = 1\n\"\"\"open\nif True:\n  pass";
    let result = python().classify(text);
    assert_eq!(
        texts(text, &result, Category::Docstring),
        vec!["\"\"\"open\nif True:\n  pass"]
    );
    assert_eq!(texts(text, &result, Category::Number), vec!["1"]);
    assert!(texts(text, &result, Category::Keyword).is_empty());
}

#[test]
fn test_keywords_need_whole_words() {
    let text = "iffy = format_len + elif";
    let result = python().classify(text);
    assert_eq!(texts(text, &result, Category::Keyword), vec!["elif"]);
    assert!(texts(text, &result, Category::FunctionName).is_empty());
}

#[test]
fn test_reserved_builtins_are_keywords() {
    let text = "x = None or True";
    let result = python().classify(text);
    assert_eq!(
        texts(text, &result, Category::Keyword),
        vec!["None", "or", "True"]
    );
    assert!(texts(text, &result, Category::Exception).is_empty());
}

#[test]
fn test_empty_vocabulary_matches_no_words() {
    let classifier = Classifier::builder()
        .vocabulary(Vocabulary::empty())
        .build()
        .unwrap();
    let text = "if len(x): 42";
    let result = classifier.classify(text);
    assert!(result.ranges(Category::Keyword).unwrap().is_empty());
    assert!(result.ranges(Category::FunctionName).unwrap().is_empty());
    assert_eq!(texts(text, &result, Category::Number), vec!["42"]);
}

#[test]
fn test_no_active_categories() {
    let classifier = Classifier::builder()
        .categories(std::iter::empty())
        .build()
        .unwrap();
    let result = classifier.classify("if 1: 'x'");
    assert!(result.is_empty());
    assert_eq!(result.categories().count(), 0);
}

#[test]
fn test_bad_vocabulary_fails_at_build() {
    let result = Classifier::builder()
        .vocabulary(Vocabulary::new(["if", "a b"], Vec::<&str>::new()))
        .build();
    assert!(matches!(
        result,
        Err(crate::ConfigurationError::InvalidIdentifier { .. })
    ));
}
