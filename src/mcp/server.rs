//! The envelope boundary around the tool router.
//!
//! `InterMcpServer` is what transports serve. It delegates everything to
//! the macro-generated dispatch in [`InterTools`], with two differences
//! required by the tool contract:
//!
//! - an unknown tool name is answered before dispatch (and before any
//!   network activity) with a flagged error envelope,
//! - every error a tool produces — parameter deserialization,
//!   authentication, remote API, storage — is flattened into
//!   `{content: [text: "Erro: <mensagem>"], isError: true}` instead of a
//!   protocol-level failure. Nothing thrown during a call ever reaches
//!   the transport layer.

use std::sync::Arc;

use rmcp::{
    ErrorData, RoleServer, ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Content, InitializeRequestParam, InitializeResult,
        ListToolsResult, PaginatedRequestParam, ServerInfo,
    },
    service::RequestContext,
};
use tracing::warn;

use crate::mcp::InterTools;
use crate::mcp::error::InterError;
use crate::mcp::http::InterClient;
use crate::mcp::storage::PdfStorage;

#[derive(Clone)]
pub struct InterMcpServer {
    tools: InterTools,
}

impl InterMcpServer {
    pub fn new(client: Arc<InterClient>, storage: Arc<PdfStorage>) -> Self {
        Self {
            tools: InterTools::new(client, storage),
        }
    }

    fn envelope_erro(mensagem: &str) -> CallToolResult {
        CallToolResult::error(vec![Content::text(format!("Erro: {mensagem}"))])
    }
}

impl ServerHandler for InterMcpServer {
    fn get_info(&self) -> ServerInfo {
        self.tools.get_info()
    }

    async fn initialize(
        &self,
        request: InitializeRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, ErrorData> {
        self.tools.initialize(request, context).await
    }

    async fn list_tools(
        &self,
        request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        ServerHandler::list_tools(&self.tools, request, context).await
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        if !self.tools.has_tool(request.name.as_ref()) {
            let erro = InterError::UnknownTool(request.name.to_string());
            warn!(tool = %request.name, "tool call for unknown tool");
            return Ok(Self::envelope_erro(&erro.to_string()));
        }

        let nome = request.name.clone();
        match ServerHandler::call_tool(&self.tools, request, context).await {
            Ok(resultado) => Ok(resultado),
            Err(erro) => {
                warn!(tool = %nome, error = %erro.message, "tool call failed");
                Ok(Self::envelope_erro(&erro.message))
            }
        }
    }
}
