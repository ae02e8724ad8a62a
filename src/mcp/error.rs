//! Error types for the banco Inter MCP implementation.
//!
//! `InterError` covers everything from fatal startup configuration
//! problems to per-call failures that end up inside the tool-response
//! envelope. Variants that reach the user carry Portuguese messages, the
//! same wording the remote API's consumers already know. The `From`
//! conversion into RMCP's `ErrorData` keeps the tool signatures on `?`.

use reqwest::StatusCode;
use rmcp::ErrorData;
use rmcp::model::ErrorCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InterError {
    /// Missing or invalid startup configuration. Fatal: the process logs
    /// the message and exits.
    #[error("{0}")]
    Config(String),

    /// The OAuth token endpoint rejected the client credentials.
    #[error("falha na autenticação com o banco Inter: {0}")]
    Auth(String),

    /// A banking endpoint answered with a non-2xx status.
    #[error("API do Inter retornou {status}: {body}")]
    Api { status: StatusCode, body: String },

    /// Tool-call request for a name that is not in the dispatch table.
    #[error("Ferramenta não encontrada: {0}")]
    UnknownTool(String),

    #[error("{0}")]
    InvalidParams(String),

    /// The remote payload did not have the contracted shape.
    #[error("resposta inesperada da API do Inter: {0}")]
    UnexpectedResponse(String),

    #[error("erro de armazenamento: {0}")]
    Storage(#[from] std::io::Error),

    #[error("falha na requisição HTTP: {0}")]
    Http(#[from] reqwest::Error),

    #[error("falha na requisição HTTP: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    #[error("falha ao serializar resposta: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<InterError> for ErrorData {
    fn from(err: InterError) -> Self {
        let code = match &err {
            InterError::InvalidParams(_) => ErrorCode::INVALID_PARAMS,
            InterError::UnknownTool(_) => ErrorCode::METHOD_NOT_FOUND,
            _ => ErrorCode::INTERNAL_ERROR,
        };
        Self::new(code, err.to_string(), None)
    }
}
