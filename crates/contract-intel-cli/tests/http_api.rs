use std::{net::SocketAddr, sync::Arc};

use contract_intel_cli::{build_router, WELCOME_MESSAGE};
use contract_intel_core::ContractAnalyzer;
use once_cell::sync::Lazy;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

static ANALYZER: Lazy<Arc<ContractAnalyzer>> =
    Lazy::new(|| Arc::new(ContractAnalyzer::new().expect("analyzer builds")));

async fn spawn_server(max_body_bytes: usize) -> SocketAddr {
    let app = build_router(Arc::clone(&ANALYZER), max_body_bytes);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

async fn send_raw(addr: SocketAddr, request: String) -> (u16, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    stream
        .write_all(request.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("status");
    (status, body.to_string())
}

async fn get(addr: SocketAddr, path: &str) -> (u16, String) {
    send_raw(
        addr,
        format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n"),
    )
    .await
}

async fn post_json(addr: SocketAddr, path: &str, body: &str) -> (u16, String) {
    send_raw(
        addr,
        format!(
            "POST {path} HTTP/1.1\r\nHost: {addr}\r\nContent-Type: application/json\r\nContent-Length: {len}\r\nConnection: close\r\n\r\n{body}",
            len = body.len()
        ),
    )
    .await
}

#[tokio::test]
async fn root_returns_welcome_message() {
    let addr = spawn_server(1024 * 1024).await;
    let (status, body) = get(addr, "/").await;
    assert_eq!(status, 200);
    let value: serde_json::Value = serde_json::from_str(&body).expect("welcome json");
    assert_eq!(value["message"], WELCOME_MESSAGE);
}

#[tokio::test]
async fn agents_endpoint_lists_every_analyzer() {
    let addr = spawn_server(1024 * 1024).await;
    let (status, body) = get(addr, "/agents").await;
    assert_eq!(status, 200);
    let value: serde_json::Value = serde_json::from_str(&body).expect("agents json");
    let agents = value["agents"].as_array().expect("agents array");
    assert_eq!(agents.len(), 11);
    assert_eq!(agents[0], json!({"name": "Contract Reader", "job": "Extract basic info"}));
    assert_eq!(agents[9]["name"], "Contract Scorer");
}

#[tokio::test]
async fn analyze_contract_returns_combined_report() {
    let addr = spawn_server(1024 * 1024).await;
    let payload = json!({
        "contract_text": "This agreement is between Acme Corp (\"Party A\") and Globex (\"Party B\") for $10,000 on 01/15/2024."
    })
    .to_string();
    let (status, body) = post_json(addr, "/analyze-contract", &payload).await;
    assert_eq!(status, 200);

    let report: serde_json::Value = serde_json::from_str(&body).expect("report json");
    assert_eq!(report["status"], "success");
    assert_eq!(
        report["contract_reader"]["parties"],
        json!(["Party A: Acme Corp", "Party B: Globex"])
    );
    assert_eq!(report["contract_reader"]["dates"], json!(["01/15/2024"]));
    assert_eq!(report["contract_reader"]["amounts"], json!(["$10,000"]));
    assert_eq!(report["risk_checker"]["risk_level"], "VERY_LOW");
    assert_eq!(report["clauses"]["clauses"]["Payment Terms"], "Not found");
    for section in [
        "summary",
        "jurisdiction",
        "obligations",
        "negotiation_advice",
        "missing_clauses",
        "red_flags",
        "contract_score",
        "amendments",
    ] {
        assert!(report[section]["agent_name"].is_string(), "missing {section}");
    }
}

#[tokio::test]
async fn empty_contract_is_accepted() {
    let addr = spawn_server(1024 * 1024).await;
    let (status, body) = post_json(addr, "/analyze-contract", r#"{"contract_text": ""}"#).await;
    assert_eq!(status, 200);
    let report: serde_json::Value = serde_json::from_str(&body).expect("report json");
    assert_eq!(report["contract_score"]["contract_score"], 100);
    assert_eq!(report["contract_score"]["rating"], "Good");
}

#[tokio::test]
async fn missing_field_is_rejected() {
    let addr = spawn_server(1024 * 1024).await;
    let (status, _) = post_json(addr, "/analyze-contract", r#"{"text": "hello"}"#).await;
    assert_eq!(status, 422);
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let addr = spawn_server(1024 * 1024).await;
    let (status, _) = post_json(addr, "/analyze-contract", "{not json").await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let addr = spawn_server(32).await;
    let payload = json!({ "contract_text": "x".repeat(64) }).to_string();
    let (status, _) = post_json(addr, "/analyze-contract", &payload).await;
    assert_eq!(status, 413);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_analyses_all_complete() {
    let addr = spawn_server(1024 * 1024).await;
    let long_contract = "The Vendor shall pay a penalty on breach of the terms. ".repeat(2_000);
    let payload = json!({ "contract_text": long_contract }).to_string();

    let analyses: Vec<_> = (0..4)
        .map(|_| {
            let payload = payload.clone();
            tokio::spawn(async move { post_json(addr, "/analyze-contract", &payload).await })
        })
        .collect();
    let (status, _) = get(addr, "/").await;
    assert_eq!(status, 200);

    for handle in analyses {
        let (status, body) = handle.await.expect("request task");
        assert_eq!(status, 200);
        let report: serde_json::Value = serde_json::from_str(&body).expect("report json");
        assert_eq!(report["risk_checker"]["risk_level"], "MEDIUM");
    }
}
