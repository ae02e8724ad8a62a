//! Tool that issues a new charge (boleto).
//!
//! The parameter struct is the full issuance body from `mcp::types`, so
//! the declared schema carries the remote constraints (`seuNumero` up to
//! 15 characters, `valorNominal` at least 2.50, required payer block).

use rmcp::ErrorData;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content};

use crate::mcp::http::InterClient;
use crate::mcp::tools::texto_json;
use crate::mcp::types::EmitirCobrancaRequest;

pub async fn emitir_boleto(
    client: &InterClient,
    Parameters(pedido): Parameters<EmitirCobrancaRequest>,
) -> Result<CallToolResult, ErrorData> {
    let resultado = client.emitir_cobranca(&pedido).await?;
    Ok(CallToolResult::success(vec![Content::text(texto_json(
        &resultado,
    )?)]))
}
