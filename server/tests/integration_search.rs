use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use searchcore::ScoringMethod;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;
use tower::ServiceExt;

const CORPUS: &str = "\
*PAGE:http://page1.com
title1
this
is
a
sample
example
*PAGE:http://page2.com
title2
example
example
example
*PAGE:http://page3.com
title3
";

fn build_tiny_app(dir: &Path, method: ScoringMethod) -> Router {
    let corpus = dir.join("corpus.txt");
    fs::write(&corpus, CORPUS).unwrap();
    let web = dir.join("web");
    fs::create_dir_all(&web).unwrap();
    fs::write(web.join("index.html"), "<html>search</html>").unwrap();
    server::build_app(server::load_searcher(&corpus, method), &web)
}

async fn call(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let req = Request::get(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

async fn call_json(app: Router, uri: &str) -> Value {
    let (status, body) = call(app, uri).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn search_returns_ranked_results() {
    let dir = tempdir().unwrap();
    let app = build_tiny_app(dir.path(), ScoringMethod::TermFrequency);

    let json = call_json(app, "/search?q=example").await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["url"], "http://page2.com");
    assert_eq!(arr[0]["title"], "title2");
    assert_eq!(arr[1]["url"], "http://page1.com");
}

#[tokio::test]
async fn unknown_word_returns_message() {
    let dir = tempdir().unwrap();
    let app = build_tiny_app(dir.path(), ScoringMethod::TfIdf);

    let json = call_json(app, "/search?q=flower1").await;
    assert_eq!(json, serde_json::json!([{ "message": server::NO_RESULTS_MESSAGE }]));
}

#[tokio::test]
async fn missing_query_returns_message() {
    let dir = tempdir().unwrap();
    let app = build_tiny_app(dir.path(), ScoringMethod::TermFrequency);

    let json = call_json(app.clone(), "/search").await;
    assert_eq!(json[0]["message"], server::NO_QUERY_MESSAGE);
    let json = call_json(app, "/search?q=").await;
    assert_eq!(json[0]["message"], server::NO_QUERY_MESSAGE);
}

#[tokio::test]
async fn or_query_is_url_decoded() {
    let dir = tempdir().unwrap();
    let app = build_tiny_app(dir.path(), ScoringMethod::TermFrequency);

    let json = call_json(app, "/search?q=sample%20OR%20missing").await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["url"], "http://page1.com");
}

#[tokio::test]
async fn serves_health_and_static_page() {
    let dir = tempdir().unwrap();
    let app = build_tiny_app(dir.path(), ScoringMethod::TermFrequency);

    let (status, body) = call(app.clone(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
    let (status, body) = call(app, "/index.html").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<html>search</html>");
}

#[tokio::test]
async fn unreadable_corpus_serves_empty_index() {
    let dir = tempdir().unwrap();
    let searcher = server::load_searcher(&dir.path().join("missing.txt"), ScoringMethod::TermFrequency);
    assert_eq!(searcher.index().num_docs(), 0);
    let app = server::build_app(searcher, dir.path());

    let json = call_json(app, "/search?q=example").await;
    assert_eq!(json[0]["message"], server::NO_RESULTS_MESSAGE);
}

#[test]
fn default_web_dir_holds_the_search_page() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..");
    let web = root.join(server::DEFAULT_WEB_DIR);
    for asset in ["index.html", "code.js", "style.css"] {
        assert!(web.join(asset).is_file(), "missing {asset}");
    }
}

#[test]
fn corpus_path_falls_back_to_config_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.txt");
    fs::write(&config, "data/enwiki-small.txt\n").unwrap();
    let path = server::resolve_corpus_path(None, &config).unwrap();
    assert_eq!(path, Path::new("data/enwiki-small.txt"));

    let explicit = server::resolve_corpus_path(Some("other.txt".into()), &config).unwrap();
    assert_eq!(explicit, Path::new("other.txt"));

    assert!(server::resolve_corpus_path(None, &dir.path().join("absent.txt")).is_err());
}
