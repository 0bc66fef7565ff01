use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use rust_record_processing::ingestion::{read_transformed_lines, read_trimmed_lines, LineSource};
use rust_record_processing::processing::{line_transform, tag_by_predicate, trim_lines};
use rust_record_processing::ProcessingError;

fn tmp_file(ext: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("rust-record-processing-lines-{nanos}.{ext}"))
}

#[test]
fn trimmed_lines_from_fixture() {
    let lines = read_trimmed_lines("tests/fixtures/padded.txt").unwrap();
    assert_eq!(lines, vec!["a", "b", "c"]);
}

#[test]
fn lazy_source_matches_eager_read() {
    let source = LineSource::open("tests/fixtures/padded.txt").unwrap();
    let lazy: Vec<String> = trim_lines(source).collect::<Result<_, _>>().unwrap();
    assert_eq!(lazy, read_trimmed_lines("tests/fixtures/padded.txt").unwrap());
}

#[test]
fn custom_transform_keeps_line_count() {
    let lines = read_transformed_lines("tests/fixtures/lambda.txt", |l| l.trim().len().to_string()).unwrap();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2], "30");
}

#[test]
fn missing_file_fails_on_open() {
    let err = LineSource::open("tests/fixtures/does_not_exist.txt").unwrap_err();
    match err {
        ProcessingError::ResourceUnavailable { path, line, source } => {
            assert!(path.ends_with("does_not_exist.txt"));
            assert_eq!(line, None);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn eager_read_returns_no_partial_result_on_bad_bytes() {
    let path = tmp_file("txt");
    fs::write(&path, b"first\nsecond\n\xc3\x28\nfourth\n").unwrap();

    let err = read_trimmed_lines(&path).unwrap_err();
    assert!(err.to_string().contains("(line 3)"));

    let source = LineSource::open(&path).unwrap();
    let items: Vec<_> = line_transform(source, |l| l).collect();
    assert_eq!(items.len(), 3);
    assert!(items[0].is_ok() && items[1].is_ok() && items[2].is_err());

    let _ = fs::remove_file(&path);
}

#[test]
fn trim_then_tag_lambda_sentences() {
    let lines = read_trimmed_lines("tests/fixtures/lambda.txt").unwrap();
    let mark = tag_by_predicate(&lines, |s| s.contains("anonymous"));
    assert_eq!(
        mark,
        vec![
            (true, "lambda functions are anonymous functions.".to_string()),
            (true, "anonymous functions dont have a name.".to_string()),
            (false, "functions are object in python".to_string()),
        ]
    );
}
