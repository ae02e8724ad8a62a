//! One module per MCP tool.
//!
//! Each module holds the tool's typed parameter struct (when it takes
//! input) and the free async function the router method in `mcp::mod`
//! delegates to. Success payloads coming back from the API are returned
//! verbatim as pretty-printed JSON text.

pub mod cancelar_cobranca;
pub mod cobranca_pdf;
pub mod emitir_cobranca;
pub mod extrato;
pub mod extrato_pdf;
pub mod listar_cobrancas;
pub mod saldo;
pub mod sumario_cobrancas;

use rmcp::ErrorData;
use serde_json::Value;

use crate::mcp::error::InterError;

/// Pretty-prints a passthrough payload for the text content block.
pub(crate) fn texto_json(valor: &Value) -> Result<String, ErrorData> {
    serde_json::to_string_pretty(valor).map_err(|e| InterError::from(e).into())
}
