//! Tool that exports the statement as a PDF and saves it locally.

use rmcp::ErrorData;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::mcp::http::InterClient;
use crate::mcp::storage::PdfStorage;

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BaixarPdfExtratoRequest {
    #[schemars(description = "Data inicial do período, YYYY-MM-DD")]
    pub data_inicial: String,
    #[schemars(description = "Data final do período, YYYY-MM-DD")]
    pub data_final: String,
}

pub async fn baixar_pdf_extrato(
    client: &InterClient,
    storage: &PdfStorage,
    Parameters(args): Parameters<BaixarPdfExtratoRequest>,
) -> Result<CallToolResult, ErrorData> {
    // Dates are validated while building the path, before the download.
    let caminho = storage.caminho_extrato(&args.data_inicial, &args.data_final)?;
    let pdf = client
        .extrato_pdf(&args.data_inicial, &args.data_final)
        .await?;
    storage.salvar(&caminho, &pdf).await?;
    Ok(CallToolResult::success(vec![Content::text(format!(
        "PDF do extrato salvo em: {}",
        caminho.display()
    ))]))
}
