use std::collections::HashMap;
use std::net::SocketAddr;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use corpus::{BaconIpsumSource, CorpusConfig, CorpusSource, FetchError, ParagraphCount};
use tokio::net::TcpListener;

async fn spawn(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn source(addr: SocketAddr) -> BaconIpsumSource {
    let cfg = CorpusConfig {
        base_url: format!("http://{addr}/"),
        ..Default::default()
    };
    BaconIpsumSource::new(&cfg).unwrap()
}

fn count(n: u64) -> ParagraphCount {
    ParagraphCount::new(n, 100).unwrap()
}

async fn echo(Query(params): Query<HashMap<String, String>>) -> Json<Vec<String>> {
    let n: usize = params["paras"].parse().unwrap();
    let kind = params["type"].clone();
    Json((0..n).map(|i| format!("{kind} paragraph {i}")).collect())
}

#[tokio::test]
async fn fetches_requested_paragraphs() {
    let addr = spawn(Router::new().route("/api/", get(echo))).await;
    let source = source(addr);
    assert_eq!(source.endpoint(), format!("http://{addr}/api/"));

    let paragraphs = source.fetch(count(2)).await.unwrap();
    assert_eq!(
        paragraphs,
        vec!["all-meat paragraph 0".to_string(), "all-meat paragraph 1".to_string()]
    );
}

#[tokio::test]
async fn empty_array_is_not_an_error() {
    let app = Router::new().route("/api/", get(|| async { Json(Vec::<String>::new()) }));
    let addr = spawn(app).await;
    assert_eq!(source(addr).fetch(count(3)).await, Ok(Vec::new()));
}

#[tokio::test]
async fn error_status_is_reported() {
    let app = Router::new().route("/api/", get(|| async { StatusCode::SERVICE_UNAVAILABLE }));
    let addr = spawn(app).await;
    assert_eq!(
        source(addr).fetch(count(1)).await,
        Err(FetchError::Status(503))
    );
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let app = Router::new().route("/api/", get(|| async { "<html>bacon</html>" }));
    let addr = spawn(app).await;
    assert!(matches!(
        source(addr).fetch(count(1)).await,
        Err(FetchError::Decode(_))
    ));
}

#[tokio::test]
async fn unreachable_source_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    assert!(matches!(
        source(addr).fetch(count(1)).await,
        Err(FetchError::Transport(_))
    ));
}
