use mail_connectors::{report, scan_corpus, AggregationEngine, ExtractedDocument, DEFAULT_SUFFIX};
use std::collections::HashSet;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::TempDir;

fn write_doc(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn sample_corpus() -> TempDir {
    let root = TempDir::new().unwrap();
    let inbox = root.path().join("maildir").join("inbox");
    let sent = root.path().join("maildir").join("sent");
    fs::create_dir_all(&inbox).unwrap();
    fs::create_dir_all(&sent).unwrap();

    write_doc(
        &sent,
        "1.",
        "Message-ID: <1>\nFrom: a@enron.com\nTo: b@enron.com, c@enron.com\nSubject: one\n\nbody\n",
    );
    write_doc(
        &sent,
        "2.",
        "Message-ID: <2>\nFrom: a@enron.com\nTo: b@enron.com\nSubject: two\n\nbody\n",
    );
    write_doc(
        &inbox,
        "3.",
        "Message-ID: <3>\nFrom: b@enron.com\nTo: a@enron.com\nSubject: three\n\nbody\n",
    );
    write_doc(
        &inbox,
        "4.",
        "Message-ID: <4>\nFrom: outsider@example.com\nTo: a@enron.com\nSubject: four\n\nbody\n",
    );
    // d only ever sends, so it classifies as a connector
    write_doc(
        &sent,
        "5.",
        "Message-ID: <5>\nFrom: d@enron.com\nTo: c@enron.com\nSubject: five\n\nbody\n",
    );
    root
}

// --- Traversal ---

#[test]
fn test_scan_walks_nested_directories() {
    let root = sample_corpus();
    let (engine, summary) = scan_corpus(root.path(), DEFAULT_SUFFIX).unwrap();

    assert_eq!(summary.documents, 5);

    // a: sent docs 1+2, received from doc 3; doc 4 has no valid sender
    let a = engine.lookup("a@enron.com").unwrap();
    assert_eq!(a.sent, 2);
    assert_eq!(a.received, 1);
    assert_eq!(a.team_size, 4);

    let b = engine.lookup("b@enron.com").unwrap();
    assert_eq!(b.sent, 1);
    assert_eq!(b.received, 2);
    assert_eq!(b.team_size, 3);

    // c only ever received
    assert!(engine.lookup("c@enron.com").is_none());

    // d never received anything: the sample corpus's one connector
    let connectors: HashSet<&str> = engine.connectors().collect();
    assert_eq!(connectors, HashSet::from(["d@enron.com"]));
}

#[test]
fn test_scan_empty_directory() {
    let root = TempDir::new().unwrap();
    let (engine, summary) = scan_corpus(root.path(), DEFAULT_SUFFIX).unwrap();

    assert_eq!(summary.documents, 0);
    assert_eq!(engine.sender_count(), 0);
    assert_eq!(engine.known_addresses(), 0);
}

#[test]
fn test_scan_summary_census() {
    let root = sample_corpus();
    let (_, summary) = scan_corpus(root.path(), DEFAULT_SUFFIX).unwrap();

    // Mentions across all four documents: From/To header lines for
    // a, b, c and the outsider, in both directions
    assert!(summary.distinct_addresses >= 4);
}

// --- Sinks ---

#[test]
fn test_console_and_file_sinks_agree() {
    let root = sample_corpus();
    let (engine, _) = scan_corpus(root.path(), DEFAULT_SUFFIX).unwrap();
    let connectors: Vec<String> = engine.connectors().map(str::to_string).collect();

    let mut console = Vec::new();
    report::print_connectors(&connectors, &mut console).unwrap();

    let out = TempDir::new().unwrap();
    let path = out.path().join("connectors.txt");
    report::write_connectors(&connectors, &path).unwrap();

    let console_set: HashSet<String> = String::from_utf8(console)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    let file_set: HashSet<String> = fs::read_to_string(&path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();

    assert_eq!(console_set, file_set);
    assert_eq!(console_set.len(), connectors.len());
}

#[test]
fn test_write_connectors_empty_list() {
    let out = TempDir::new().unwrap();
    let path = out.path().join("connectors.txt");
    report::write_connectors(&[], &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_write_connectors_unwritable_path_fails() {
    let out = TempDir::new().unwrap();
    let path = out.path().join("missing").join("connectors.txt");
    assert!(report::write_connectors(&["a@enron.com".to_string()], &path).is_err());
}

#[test]
fn test_stats_json_export() {
    let root = sample_corpus();
    let (engine, _) = scan_corpus(root.path(), DEFAULT_SUFFIX).unwrap();

    let out = TempDir::new().unwrap();
    let path = out.path().join("stats.json");
    report::write_stats_json(&engine, &path).unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed["a@enron.com"]["sent"], 2);
    assert_eq!(parsed["b@enron.com"]["received"], 2);
    assert!(parsed.get("c@enron.com").is_none());
}

// --- Interactive queries ---

fn engine_with_one_pair() -> AggregationEngine {
    let mut engine = AggregationEngine::new();
    engine.record_document(&ExtractedDocument {
        sender: "a@enron.com".to_string(),
        recipients: vec!["b@enron.com".to_string()],
    });
    engine
}

#[test]
fn test_query_loop_reports_stats() {
    let engine = engine_with_one_pair();
    let input = Cursor::new("a@enron.com\nEXIT\n");
    let mut output = Vec::new();

    report::query_loop(&engine, input, &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("* a@enron.com has sent messages to 1 others"));
    assert!(output.contains("* a@enron.com has received messages from 0 others"));
    assert!(output.contains("* a@enron.com is in a team with 1 individuals"));
}

#[test]
fn test_query_loop_not_found() {
    let engine = engine_with_one_pair();

    // A receive-only address is reported as not found
    let input = Cursor::new("b@enron.com\nexit\n");
    let mut output = Vec::new();

    report::query_loop(&engine, input, &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("Email address (b@enron.com) not found in the dataset."));
}

#[test]
fn test_query_loop_exit_is_case_insensitive() {
    let engine = engine_with_one_pair();
    let input = Cursor::new("  eXiT  \nshould-not-be-read@enron.com\n");
    let mut output = Vec::new();

    report::query_loop(&engine, input, &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(!output.contains("should-not-be-read"));
}

#[test]
fn test_query_loop_terminates_on_eof() {
    let engine = engine_with_one_pair();
    let input = Cursor::new("a@enron.com\n");
    let mut output = Vec::new();

    report::query_loop(&engine, input, &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("has sent messages"));
}
