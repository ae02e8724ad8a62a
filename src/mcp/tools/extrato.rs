//! Tool for the account statement over a date range.

use rmcp::ErrorData;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::mcp::http::InterClient;
use crate::mcp::tools::texto_json;

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConsultarExtratoRequest {
    #[schemars(description = "Data inicial do período, YYYY-MM-DD")]
    pub data_inicial: String,
    #[schemars(description = "Data final do período, YYYY-MM-DD")]
    pub data_final: String,
}

pub async fn consultar_extrato(
    client: &InterClient,
    Parameters(args): Parameters<ConsultarExtratoRequest>,
) -> Result<CallToolResult, ErrorData> {
    let extrato = client.extrato(&args.data_inicial, &args.data_final).await?;
    Ok(CallToolResult::success(vec![Content::text(texto_json(
        &extrato,
    )?)]))
}
