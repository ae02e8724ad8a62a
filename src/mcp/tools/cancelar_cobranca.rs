//! Tool that cancels an issued charge.

use rmcp::ErrorData;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::mcp::http::InterClient;

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CancelarBoletoRequest {
    #[schemars(description = "Código de solicitação do boleto a cancelar")]
    pub codigo_solicitacao: String,
    #[schemars(description = "Motivo do cancelamento")]
    pub motivo: String,
}

pub async fn cancelar_boleto(
    client: &InterClient,
    Parameters(args): Parameters<CancelarBoletoRequest>,
) -> Result<CallToolResult, ErrorData> {
    client
        .cancelar_cobranca(&args.codigo_solicitacao, &args.motivo)
        .await?;
    Ok(CallToolResult::success(vec![Content::text(format!(
        "Boleto {} cancelado com sucesso.",
        args.codigo_solicitacao
    ))]))
}
