//! Banco Inter Model Context Protocol implementation.
//!
//! The implementation is organized into:
//!
//! - `error`: error types and conversions
//! - `http`: authenticated client for Inter's REST API
//! - `storage`: local PDF storage for the download tools
//! - `tools`: individual MCP tools for the banking operations
//! - `types`: request shapes shared by tools and client
//!
//! `InterTools` here carries the macro-generated tool router; the entry
//! point for transports is [`InterMcpServer`] in `server`, which wraps
//! every dispatch into the uniform success/error envelope.

pub mod error;
pub mod http;
pub mod server;
pub mod storage;
pub mod tools;
pub mod types;

pub use server::InterMcpServer;

use std::sync::Arc;

use axum::http::request;
use rmcp::{
    ErrorData, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Implementation, InitializeRequestParam, InitializeResult, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use tracing::info;

use crate::mcp::http::InterClient;
use crate::mcp::storage::PdfStorage;
use crate::mcp::tools::{
    cancelar_cobranca::{self, CancelarBoletoRequest},
    cobranca_pdf::{self, BaixarPdfBoletoRequest},
    emitir_cobranca,
    extrato::{self, ConsultarExtratoRequest},
    extrato_pdf::{self, BaixarPdfExtratoRequest},
    listar_cobrancas::{self, ListarBoletosRequest},
    saldo,
    sumario_cobrancas::{self, SumarioBoletosRequest},
};
use crate::mcp::types::EmitirCobrancaRequest;

#[derive(Clone)]
pub struct InterTools {
    tool_router: ToolRouter<Self>,
    client: Arc<InterClient>,
    storage: Arc<PdfStorage>,
}

#[tool_router]
impl InterTools {
    pub fn new(client: Arc<InterClient>, storage: Arc<PdfStorage>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            client,
            storage,
        }
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.tool_router.has_route(name)
    }

    // Thin delegating methods so the `tool_router` proc-macro (which scans
    // this impl block) can discover and register the tools. These simply
    // forward to the actual implementations in `mcp::tools::*` so the
    // implementation remains modular.

    #[tool(description = "Consulta o saldo da conta corrente.")]
    async fn consultar_saldo(&self) -> Result<CallToolResult, ErrorData> {
        saldo::consultar_saldo(&self.client).await
    }

    #[tool(description = "Consulta o extrato da conta em um período.")]
    async fn consultar_extrato(
        &self,
        params: Parameters<ConsultarExtratoRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        extrato::consultar_extrato(&self.client, params).await
    }

    #[tool(description = "Lista as cobranças (boletos) emitidas.")]
    async fn listar_boletos(
        &self,
        params: Parameters<ListarBoletosRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        listar_cobrancas::listar_boletos(&self.client, params).await
    }

    #[tool(description = "Emite um novo boleto de cobrança.")]
    async fn emitir_boleto(
        &self,
        params: Parameters<EmitirCobrancaRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        emitir_cobranca::emitir_boleto(&self.client, params).await
    }

    #[tool(description = "Gera e salva o PDF de um boleto pelo código de solicitação.")]
    async fn baixar_pdf_boleto(
        &self,
        params: Parameters<BaixarPdfBoletoRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        cobranca_pdf::baixar_pdf_boleto(&self.client, &self.storage, params).await
    }

    #[tool(description = "Cancela um boleto de cobrança.")]
    async fn cancelar_boleto(
        &self,
        params: Parameters<CancelarBoletoRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        cancelar_cobranca::cancelar_boleto(&self.client, params).await
    }

    #[tool(description = "Recupera o sumário de cobranças por período.")]
    async fn sumario_boletos(
        &self,
        params: Parameters<SumarioBoletosRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        sumario_cobrancas::sumario_boletos(&self.client, params).await
    }

    #[tool(description = "Gera e salva o PDF do extrato em um período.")]
    async fn baixar_pdf_extrato(
        &self,
        params: Parameters<BaixarPdfExtratoRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        extrato_pdf::baixar_pdf_extrato(&self.client, &self.storage, params).await
    }
}

#[tool_handler]
impl ServerHandler for InterTools {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Servidor MCP do banco Inter: consulta de saldo e extrato, emissão, \
                 cancelamento e sumário de boletos, e download de PDFs."
                    .to_string(),
            ),
        }
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, ErrorData> {
        if let Some(http_request_part) = context.extensions.get::<request::Parts>() {
            let initialize_headers = &http_request_part.headers;
            let initialize_uri = &http_request_part.uri;
            info!(?initialize_headers, %initialize_uri, "initialize from http server");
        }
        Ok(self.get_info())
    }
}
