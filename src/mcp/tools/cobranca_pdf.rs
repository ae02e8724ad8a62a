//! Tool that downloads a charge's PDF and saves it locally.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use rmcp::ErrorData;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::mcp::error::InterError;
use crate::mcp::http::InterClient;
use crate::mcp::storage::PdfStorage;

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BaixarPdfBoletoRequest {
    #[schemars(description = "Código de solicitação retornado na emissão do boleto")]
    pub codigo_solicitacao: String,
}

pub async fn baixar_pdf_boleto(
    client: &InterClient,
    storage: &PdfStorage,
    Parameters(args): Parameters<BaixarPdfBoletoRequest>,
) -> Result<CallToolResult, ErrorData> {
    // The code is validated while building the path, before the download.
    let caminho = storage.caminho_boleto(&args.codigo_solicitacao)?;
    let pdf_base64 = client.cobranca_pdf(&args.codigo_solicitacao).await?;
    let pdf = BASE64
        .decode(pdf_base64.as_bytes())
        .map_err(|e| InterError::UnexpectedResponse(format!("PDF em base64 inválido: {e}")))?;
    storage.salvar(&caminho, &pdf).await?;
    Ok(CallToolResult::success(vec![Content::text(format!(
        "PDF do boleto salvo em: {}",
        caminho.display()
    ))]))
}
