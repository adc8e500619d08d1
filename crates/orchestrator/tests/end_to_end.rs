//! End-to-end tests: a local HTTP server stands in for the catalog and the
//! export goes to a temporary directory.

use std::path::Path;
use std::time::Duration;

use book_data::CSV_HEADERS;
use orchestrator::{BookOrchestrator, OrchestratorConfig, PipelineError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const CATALOG_BODY: &str = r#"{
  "kind": "books#volumes",
  "totalItems": 4,
  "items": [
    {"volumeInfo": {
      "title": "Learn Python (4.2)",
      "authors": ["Ada Lovelace"],
      "publishedDate": "2015-05-01",
      "averageRating": 4.2,
      "pageCount": 120
    }},
    {"volumeInfo": {
      "title": "Learn Python",
      "authors": ["Ada Lovelace", "Grace Hopper"],
      "publisher": "Example Press",
      "publishedDate": "2015-05-01",
      "averageRating": 4.5,
      "ratingsCount": 10,
      "language": "en",
      "categories": ["Computers"],
      "industryIdentifiers": [
        {"type": "ISBN_10", "identifier": "1234567890"},
        {"type": "ISBN_13", "identifier": "9781234567897"}
      ],
      "pageCount": 120,
      "imageLinks": {"thumbnail": "http://example.com/cover.jpg"}
    }},
    {"volumeInfo": {
      "title": "Python 2 Classic",
      "publishedDate": "2009-01-01",
      "averageRating": 5,
      "pageCount": 300
    }},
    {"volumeInfo": {
      "title": "Pamphlet",
      "publishedDate": "2020-01-01",
      "averageRating": 4.8,
      "pageCount": 0
    }}
  ]
}"#;

/// Serve a single HTTP response on an ephemeral port.
async fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/books/v1/volumes", listener.local_addr().unwrap());

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    url
}

fn config(endpoint: String, output: &Path) -> OrchestratorConfig {
    OrchestratorConfig {
        endpoint,
        timeout: Duration::from_secs(5),
        output_path: output.to_path_buf(),
        ..OrchestratorConfig::default()
    }
}

fn read_rows(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers = reader.headers().unwrap().iter().map(str::to_string).collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    (headers, rows)
}

#[tokio::test]
async fn test_full_run_reports_and_exports_ranked_books() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("books.csv");
    let url = serve_once("200 OK", CATALOG_BODY).await;

    let orchestrator = BookOrchestrator::new(config(url, &output)).unwrap();
    let mut report = Vec::<u8>::new();
    let summary = orchestrator.run(&mut report).await.unwrap();

    assert_eq!(summary.fetched, 4);
    assert_eq!(summary.kept, 2);
    assert_eq!(summary.output_path, output);

    let report = String::from_utf8(report).unwrap();
    assert!(report.starts_with("Top 5 Books:\nTitle: Learn Python\n"));
    let first = report.find("Title: Learn Python\n").unwrap();
    let second = report.find("Title: Learn Python (4.2)").unwrap();
    assert!(first < second);
    assert!(!report.contains("Python 2 Classic"));
    assert!(!report.contains("Pamphlet"));

    let (headers, rows) = read_rows(&output);
    assert_eq!(headers, CSV_HEADERS);
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0],
        [
            "Learn Python",
            "Ada Lovelace, Grace Hopper",
            "Example Press",
            "2015-05-01",
            "4.5",
            "10",
            "en",
            "Computers",
            "1234567890",
            "9781234567897",
            "",
            "120",
            "http://example.com/cover.jpg",
        ]
    );
    assert_eq!(rows[1][0], "Learn Python (4.2)");
    assert_eq!(rows[1][4], "4.2");
}

#[tokio::test]
async fn test_empty_catalog_writes_header_only_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("books.csv");
    let url = serve_once("200 OK", r#"{"kind": "books#volumes", "totalItems": 0}"#).await;

    let orchestrator = BookOrchestrator::new(config(url, &output)).unwrap();
    let mut report = Vec::<u8>::new();
    let summary = orchestrator.run(&mut report).await.unwrap();

    assert_eq!(summary.fetched, 0);
    assert_eq!(summary.kept, 0);
    assert_eq!(String::from_utf8(report).unwrap(), "Top 5 Books:\n");

    let (headers, rows) = read_rows(&output);
    assert_eq!(headers, CSV_HEADERS);
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_http_failure_is_request_error_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("books.csv");
    let url = serve_once("503 Service Unavailable", "{}").await;

    let orchestrator = BookOrchestrator::new(config(url, &output)).unwrap();
    let err = orchestrator.run(&mut Vec::<u8>::new()).await.unwrap_err();

    assert!(matches!(err, PipelineError::Transport(_)));
    assert_eq!(err.category(), "Request Error");
    assert!(!output.exists());
}

#[tokio::test]
async fn test_malformed_body_is_decode_error_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("books.csv");
    let url = serve_once("200 OK", "{\"items\": [").await;

    let orchestrator = BookOrchestrator::new(config(url, &output)).unwrap();
    let err = orchestrator.run(&mut Vec::<u8>::new()).await.unwrap_err();

    assert!(matches!(err, PipelineError::Decode(_)));
    assert_eq!(err.category(), "Invalid JSON response");
    assert!(!output.exists());
}

#[tokio::test]
async fn test_unwritable_output_is_file_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("no-such-dir").join("books.csv");
    let url = serve_once("200 OK", CATALOG_BODY).await;

    let orchestrator = BookOrchestrator::new(config(url, &output)).unwrap();
    let err = orchestrator.run(&mut Vec::<u8>::new()).await.unwrap_err();

    assert!(matches!(err, PipelineError::Io(_)));
    assert_eq!(err.category(), "File Error");
    assert!(!output.exists());
}

#[tokio::test]
async fn test_existing_export_survives_failed_fetch() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("books.csv");
    std::fs::write(&output, "previous run\n").unwrap();
    let url = serve_once("500 Internal Server Error", "{}").await;

    let orchestrator = BookOrchestrator::new(config(url, &output)).unwrap();
    assert!(orchestrator.run(&mut Vec::<u8>::new()).await.is_err());

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous run\n");
}
