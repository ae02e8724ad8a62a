//! Shared fixtures for the integration suites: a wiremock token
//! endpoint, a config pointing at the PEM fixtures, and an in-process
//! client/server pair connected over a duplex pipe.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use rmcp::{RoleClient, ServiceExt, service::RunningService};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use banco_inter_mcp::config::InterConfig;
use banco_inter_mcp::mcp::InterMcpServer;
use banco_inter_mcp::mcp::http::InterClient;
use banco_inter_mcp::mcp::storage::PdfStorage;

pub const TOKEN_PATH: &str = "/oauth/v2/token";
pub const TOKEN: &str = "token-de-teste";

pub fn fixture_config() -> InterConfig {
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    InterConfig {
        client_id: "cliente-teste".to_string(),
        client_secret: "segredo-teste".to_string(),
        cert_path: fixtures.join("cert.pem"),
        key_path: fixtures.join("key.pem"),
        conta_corrente: None,
        sandbox: true,
        tls_insecure: false,
    }
}

/// Mounts the token endpoint expecting exactly `expected_requests` hits.
pub async fn mock_token(server: &MockServer, expected_requests: u64) {
    mock_token_expiring(server, expected_requests, 3600).await;
}

pub async fn mock_token_expiring(server: &MockServer, expected_requests: u64, expires_in: u64) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": TOKEN,
            "token_type": "Bearer",
            "expires_in": expires_in,
            "scope": "boleto-cobranca.read boleto-cobranca.write extrato.read saldo.read",
        })))
        .expect(expected_requests)
        .mount(server)
        .await;
}

pub fn client_for(server: &MockServer) -> InterClient {
    client_with_config(server, &fixture_config())
}

pub fn client_with_config(server: &MockServer, config: &InterConfig) -> InterClient {
    InterClient::with_base_url(config, &server.uri()).unwrap()
}

/// Serves an `InterMcpServer` backed by `mock` over an in-memory duplex
/// pipe and returns the connected MCP client plus the storage directory.
pub async fn conectar(mock: &MockServer) -> (RunningService<RoleClient, ()>, TempDir) {
    let storage_dir = TempDir::new().unwrap();
    let client = Arc::new(client_for(mock));
    let storage = Arc::new(PdfStorage::new(storage_dir.path()).unwrap());
    let handler = InterMcpServer::new(client, storage);

    let (client_io, server_io) = tokio::io::duplex(8192);

    let (server_read, server_write) = tokio::io::split(server_io);
    tokio::spawn(async move {
        if let Ok(running) = handler.serve((server_read, server_write)).await {
            let _ = running.waiting().await;
        }
    });

    let (client_read, client_write) = tokio::io::split(client_io);
    let running = ().serve((client_read, client_write)).await.unwrap();
    (running, storage_dir)
}
