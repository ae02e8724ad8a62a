//! Tool for the charge summary (totals per status) over a period.

use rmcp::ErrorData;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::mcp::http::InterClient;
use crate::mcp::tools::texto_json;
use crate::mcp::types::SumarioCobrancasFiltro;

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SumarioBoletosRequest {
    #[schemars(description = "Data inicial do período, YYYY-MM-DD")]
    pub data_inicial: String,
    #[schemars(description = "Data final do período, YYYY-MM-DD")]
    pub data_final: String,
}

pub async fn sumario_boletos(
    client: &InterClient,
    Parameters(args): Parameters<SumarioBoletosRequest>,
) -> Result<CallToolResult, ErrorData> {
    let filtro = SumarioCobrancasFiltro::periodo(args.data_inicial, args.data_final);
    let sumario = client.sumario_cobrancas(&filtro).await?;
    Ok(CallToolResult::success(vec![Content::text(texto_json(
        &sumario,
    )?)]))
}
