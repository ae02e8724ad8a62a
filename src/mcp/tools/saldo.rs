//! Tool for the current-account balance.

use rmcp::ErrorData;
use rmcp::model::{CallToolResult, Content};

use crate::mcp::http::InterClient;
use crate::mcp::tools::texto_json;

pub async fn consultar_saldo(client: &InterClient) -> Result<CallToolResult, ErrorData> {
    let saldo = client.saldo().await?;
    Ok(CallToolResult::success(vec![Content::text(texto_json(
        &saldo,
    )?)]))
}
