//! Tool that lists issued charges (boletos) for a period.

use rmcp::ErrorData;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::mcp::http::InterClient;
use crate::mcp::tools::texto_json;
use crate::mcp::types::{ListaCobrancasFiltro, SituacaoCobranca};

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListarBoletosRequest {
    #[schemars(description = "Data de vencimento inicial YYYY-MM-DD")]
    pub data_inicial: String,
    #[schemars(description = "Data de vencimento final YYYY-MM-DD")]
    pub data_final: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Filtra pela situação da cobrança")]
    pub situacao: Option<SituacaoCobranca>,
}

pub async fn listar_boletos(
    client: &InterClient,
    Parameters(args): Parameters<ListarBoletosRequest>,
) -> Result<CallToolResult, ErrorData> {
    let mut filtro = ListaCobrancasFiltro::periodo(args.data_inicial, args.data_final);
    filtro.situacao = args.situacao;

    let cobrancas = client.listar_cobrancas(&filtro).await?;
    Ok(CallToolResult::success(vec![Content::text(texto_json(
        &cobrancas,
    )?)]))
}
