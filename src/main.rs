use std::sync::Arc;

use anyhow::Result;
use axum::{Router, serve};
use dotenv::dotenv;
use rmcp::ServiceExt;
use rmcp::transport::{
    StreamableHttpServerConfig, StreamableHttpService, stdio,
    streamable_http_server::session::local::LocalSessionManager,
};
use tokio::{net::TcpListener, signal};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use banco_inter_mcp::config::{InterConfig, ServerConfig, TransportKind};
use banco_inter_mcp::mcp::InterMcpServer;
use banco_inter_mcp::mcp::http::InterClient;
use banco_inter_mcp::mcp::storage::PdfStorage;

#[tokio::main]
async fn main() -> Result<()> {
    // Load variables from .env file if it exists into the environment
    dotenv().ok();

    // Initialize tracing. Logs go to stderr: in stdio mode stdout belongs
    // to the MCP protocol.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Configuration errors are the only fatal ones: log and exit non-zero.
    let inter_config = InterConfig::from_env().inspect_err(|e| error!("{e}"))?;
    let server_config = ServerConfig::from_env().inspect_err(|e| error!("{e}"))?;

    let client = Arc::new(InterClient::new(&inter_config).inspect_err(|e| error!("{e}"))?);
    let storage =
        Arc::new(PdfStorage::new(&server_config.storage_path).inspect_err(|e| error!("{e}"))?);

    match server_config.transport {
        TransportKind::Stdio => {
            info!("Servidor MCP do banco Inter rodando em stdio");
            let service = InterMcpServer::new(client, storage).serve(stdio()).await?;
            service.waiting().await?;
        }
        TransportKind::StreamableHttp => {
            // One handler per session; all sessions share the client (and
            // its token cache) and the storage directory.
            let service = StreamableHttpService::new(
                move || Ok(InterMcpServer::new(client.clone(), storage.clone())),
                LocalSessionManager::default().into(),
                StreamableHttpServerConfig::default(),
            );

            let router = Router::new().nest_service("/mcp", service);
            let endereco = format!("{}:{}", server_config.host, server_config.port);
            info!("Servidor MCP do banco Inter escutando em {endereco}");
            let tcp_listener = TcpListener::bind(&endereco).await?;

            // Graceful shutdown on CTRL+C
            let shutdown = async {
                signal::ctrl_c().await.unwrap_or_else(|e| {
                    eprintln!("failed to install CTRL+C handler: {e}");
                });
            };

            serve(tcp_listener, router)
                .with_graceful_shutdown(shutdown)
                .await?;
        }
    }

    Ok(())
}
