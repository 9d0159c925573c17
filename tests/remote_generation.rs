//! Integration tests for remote generation over real HTTP.
//!
//! Each test stands up a one-shot responder on a local port so the reqwest
//! backend, status handling and body parsing are exercised end to end.

use promokit::orchestration::{
    ArtistProfile, ChatCompletionClient, ContentBundle, ContentSource, FallbackGenerator,
    GeneratorConfig, Orchestrator,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Accept one connection, capture the request, answer with the given status and body.
async fn serve_once(status: &'static str, body: String) -> (SocketAddr, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        request
    });

    (addr, handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut data = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        data.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&data);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);

            if data.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&data).into_owned()
}

fn chat_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }
        ]
    })
    .to_string()
}

fn orchestrator_for(addr: SocketAddr) -> Orchestrator {
    orchestrator_with_timeout(addr, 5000)
}

fn orchestrator_with_timeout(addr: SocketAddr, timeout_ms: u64) -> Orchestrator {
    let config = GeneratorConfig {
        endpoint: format!("http://{}/v1/chat/completions", addr),
        timeout_ms,
        ..GeneratorConfig::default()
    };

    // Bypass any proxy from the environment so requests reach the local responder
    let http = reqwest::Client::builder()
        .no_proxy()
        .timeout(config.timeout())
        .build()
        .unwrap();
    let client = ChatCompletionClient::with_client(http, config.endpoint.clone());

    Orchestrator::with_backend(config, Arc::new(client))
}

fn sonic_wave() -> ArtistProfile {
    ArtistProfile::new("Sonic Wave", "Indie Pop", "18-24 alt fans").with_social_presence("5k IG")
}

fn remote_bundle() -> ContentBundle {
    let mut bundle = FallbackGenerator::generate(&sonic_wave());
    bundle.press.press_release = "Sonic Wave drops a new Indie Pop single".to_string();
    bundle.insights.top_locations[0] = "Austin, TX".to_string();
    bundle
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

/// A well-formed response is returned as-is and tagged as remote.
#[tokio::test]
async fn well_formed_response_is_used() {
    let content = serde_json::to_string(&remote_bundle()).unwrap();
    let (addr, server) = serve_once("200 OK", chat_body(&content)).await;

    let generated = orchestrator_for(addr)
        .generate_with_source(&sonic_wave(), Some("sk-test"))
        .await;

    assert_eq!(generated.source, ContentSource::Remote);
    assert_eq!(generated.bundle, remote_bundle());

    let request = server.await.unwrap();
    let lowered = request.to_lowercase();
    assert!(request.starts_with("POST /v1/chat/completions"));
    assert!(lowered.contains("authorization: bearer sk-test"));
    assert!(request.contains("- Name: Sonic Wave"));
    assert!(request.contains("\"response_format\":{\"type\":\"json_object\"}"));
}

/// A non-2xx status yields exactly the fallback bundle.
#[tokio::test]
async fn error_status_falls_back() {
    let (addr, server) =
        serve_once("500 Internal Server Error", r#"{"error":"boom"}"#.to_string()).await;

    let bundle = orchestrator_for(addr).generate(&sonic_wave(), Some("sk-test")).await;

    assert_eq!(bundle, FallbackGenerator::generate(&sonic_wave()));
    server.await.unwrap();
}

/// An unauthorized credential is treated like any other transport failure.
#[tokio::test]
async fn unauthorized_falls_back() {
    let (addr, server) =
        serve_once("401 Unauthorized", r#"{"error":"bad key"}"#.to_string()).await;

    let generated = orchestrator_for(addr)
        .generate_with_source(&sonic_wave(), Some("sk-wrong"))
        .await;

    assert_eq!(generated.source, ContentSource::Fallback);
    server.await.unwrap();
}

/// Message content that is not a bundle yields the fallback bundle.
#[tokio::test]
async fn unparsable_content_falls_back() {
    let body = chat_body("Here are some ideas for your band!");
    let (addr, server) = serve_once("200 OK", body).await;

    let bundle = orchestrator_for(addr).generate(&sonic_wave(), Some("sk-test")).await;

    assert_eq!(bundle, FallbackGenerator::generate(&sonic_wave()));
    server.await.unwrap();
}

/// A body that is not a chat-completion response yields the fallback bundle.
#[tokio::test]
async fn non_json_body_falls_back() {
    let (addr, server) = serve_once("200 OK", "<html>gateway</html>".to_string()).await;

    let bundle = orchestrator_for(addr).generate(&sonic_wave(), Some("sk-test")).await;

    assert_eq!(bundle, FallbackGenerator::generate(&sonic_wave()));
    server.await.unwrap();
}

/// A fractional platform score is a valid number; the remote bundle is kept.
#[tokio::test]
async fn fractional_score_keeps_remote_bundle() {
    let mut value = serde_json::to_value(remote_bundle()).unwrap();
    value["insights"]["platforms"][0]["score"] = serde_json::json!(87.5);
    value["insights"]["platforms"][1]["score"] = serde_json::json!(85.0);
    let (addr, server) = serve_once("200 OK", chat_body(&value.to_string())).await;

    let generated = orchestrator_for(addr)
        .generate_with_source(&sonic_wave(), Some("sk-test"))
        .await;

    assert_eq!(generated.source, ContentSource::Remote);
    assert_eq!(generated.bundle.insights.platforms[0].score, 87.5);
    assert_eq!(generated.bundle.insights.platforms[1].score, 85.0);
    server.await.unwrap();
}

/// A server that accepts but never answers trips the request timeout.
#[tokio::test]
async fn unanswered_request_times_out_and_falls_back() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        read_request(&mut socket).await;
        tokio::time::sleep(Duration::from_secs(10)).await;
        drop(socket);
    });

    let started = Instant::now();
    let generated = orchestrator_with_timeout(addr, 200)
        .generate_with_source(&sonic_wave(), Some("sk-test"))
        .await;
    let elapsed = started.elapsed();

    assert_eq!(generated.source, ContentSource::Fallback);
    assert_eq!(generated.bundle, FallbackGenerator::generate(&sonic_wave()));
    assert!(elapsed < Duration::from_secs(5), "took {:?}", elapsed);

    server.abort();
}

/// Nothing listening on the port: the connection error is swallowed.
#[tokio::test]
async fn connection_refused_falls_back() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let generated = orchestrator_for(addr)
        .generate_with_source(&sonic_wave(), Some("sk-test"))
        .await;

    assert_eq!(generated.source, ContentSource::Fallback);
    assert_eq!(generated.bundle, FallbackGenerator::generate(&sonic_wave()));
}

/// Without a credential no connection is made at all.
#[tokio::test]
async fn missing_credential_never_connects() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let bundle = orchestrator_for(addr).generate(&sonic_wave(), None).await;
    assert_eq!(bundle, FallbackGenerator::generate(&sonic_wave()));

    let accepted = tokio::time::timeout(Duration::from_millis(100), listener.accept()).await;
    assert!(accepted.is_err(), "no connection should have been attempted");
}

/// The documented example: no credential, fallback press release names the artist.
#[tokio::test]
async fn sonic_wave_example_without_credential() {
    let orchestrator = Orchestrator::new("gpt-4o").unwrap();
    let bundle = orchestrator.generate(&sonic_wave(), None).await;

    let release = &bundle.press.press_release;
    assert!(release.contains("Sonic Wave"));
    assert!(release.contains("Indie Pop"));
    assert!(!release.contains('{') && !release.contains('}'));

    let no_presence = ArtistProfile::new("Sonic Wave", "Indie Pop", "18-24 alt fans");
    let bundle = orchestrator.generate(&no_presence, None).await;
    assert!(bundle.press.press_release.contains("their growing reputation"));
}
