use std::{sync::Arc, thread};

use lexicolor::{
    classifier::{OffsetUnit, Vocabulary},
    Category, ClassificationResult, Classifier, ConfigurationError, MatchRange,
};

extern crate lexicolor;

fn sample_classifier() -> Classifier {
    Classifier::builder()
        .vocabulary(Vocabulary::new(["if", "else"], ["ValueError", "len"]))
        .build()
        .unwrap()
}

fn ranges(result: &ClassificationResult, category: Category) -> Vec<MatchRange> {
    result.ranges(category).unwrap().to_vec()
}

#[test]
fn it_classifies_closed_docstring_as_one_range() {
    let result = sample_classifier().classify(r#""""abc""""#);
    assert_eq!(ranges(&result, Category::Docstring), vec![MatchRange::new(0, 9)]);
    assert!(ranges(&result, Category::String).is_empty());
}

#[test]
fn it_classifies_open_docstring_to_end_of_text() {
    let result = sample_classifier().classify("\"\"\"abc");
    assert_eq!(ranges(&result, Category::Docstring), vec![MatchRange::new(0, 6)]);

    let result = sample_classifier().classify("x\n'''abc\ndef");
    assert_eq!(ranges(&result, Category::Docstring), vec![MatchRange::new(2, 10)]);
}

#[test]
fn it_ends_open_string_at_line_break() {
    let result = sample_classifier().classify("\"abc\ndef\"");
    let strings = ranges(&result, Category::String);
    assert_eq!(strings[0], MatchRange::new(0, 4));
    // the dangling quote on the second line opens a new string
    assert_eq!(strings[1], MatchRange::new(8, 1));
}

#[test]
fn it_classifies_scientific_number() {
    let result = sample_classifier().classify("x = 123.45e-6");
    assert_eq!(ranges(&result, Category::Number), vec![MatchRange::new(4, 9)]);
}

#[test]
fn it_ignores_digits_inside_identifiers() {
    let result = sample_classifier().classify("foo123");
    assert!(ranges(&result, Category::Number).is_empty());
    assert!(result.is_empty());
}

#[test]
fn it_partitions_vocabulary() {
    let result = sample_classifier().classify("if len(x): raise ValueError");
    assert_eq!(ranges(&result, Category::Keyword), vec![MatchRange::new(0, 2)]);
    assert_eq!(
        ranges(&result, Category::FunctionName),
        vec![MatchRange::new(3, 3)]
    );
    assert_eq!(
        ranges(&result, Category::Exception),
        vec![MatchRange::new(17, 10)]
    );
}

#[test]
fn it_is_idempotent() {
    let classifier = sample_classifier();
    let text = "if x:\n    len('a') # 1\nelse: 2.5";
    assert_eq!(classifier.classify(text), classifier.classify(text));
}

#[test]
fn it_rejects_invalid_vocabulary_before_scanning() {
    let result = Classifier::builder()
        .vocabulary(Vocabulary::new(Vec::<&str>::new(), vec!["len", "x+y"]))
        .build();
    match result {
        Err(ConfigurationError::InvalidIdentifier { category, word }) => {
            assert_eq!(category, Category::FunctionName);
            assert_eq!(word, "x+y");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn it_rejects_invalid_utf8() {
    let error = sample_classifier()
        .classify_bytes(&[b'i', b'f', 0xc3, 0x28])
        .unwrap_err();
    assert_eq!(error.valid_up_to, 2);

    let error: lexicolor::Error = error.into();
    assert!(matches!(error, lexicolor::Error::Decode(_)));
}

#[test]
fn it_reports_utf16_offsets() {
    let classifier = Classifier::builder()
        .offset_unit(OffsetUnit::Utf16)
        .build()
        .unwrap();
    // U+1D11E takes two UTF-16 code units
    let result = classifier.classify("'\u{1D11E}' 7");
    assert_eq!(ranges(&result, Category::String), vec![MatchRange::new(0, 4)]);
    assert_eq!(ranges(&result, Category::Number), vec![MatchRange::new(5, 1)]);
}

#[test]
fn it_shares_one_classifier_across_threads() {
    let classifier = Arc::new(Classifier::python().unwrap());
    let inputs = ["if True: pass", "x = 'a' # b", "print(1.5e3)", "\"\"\"doc"];
    let expected: Vec<_> = inputs.iter().map(|t| classifier.classify(t)).collect();

    let handles: Vec<_> = inputs
        .iter()
        .map(|text| {
            let classifier = Arc::clone(&classifier);
            let text = text.to_string();
            thread::spawn(move || classifier.classify(&text))
        })
        .collect();

    for (handle, expected) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
