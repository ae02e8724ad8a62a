//! Environment-based configuration.
//!
//! Two value objects are read once at startup: [`InterConfig`] with the
//! banco Inter credentials and TLS material, and [`ServerConfig`] with the
//! transport selection and storage directory. Both are immutable after
//! construction. `from_source` takes the variable lookup as a closure so
//! tests can feed a plain map instead of mutating the process environment.

use std::env;
use std::path::PathBuf;

use tracing::warn;

use crate::mcp::error::InterError;

const MENSAGEM_VARIAVEIS_OBRIGATORIAS: &str =
    "As variáveis de ambiente CLIENT_ID, CLIENT_SECRET, CERT_PATH e KEY_PATH são obrigatórias.";

/// Credentials and connection parameters for the banco Inter API.
// No Debug derive: client_secret must not reach logs.
#[derive(Clone)]
#[cfg_attr(test, derive(Debug))]
pub struct InterConfig {
    pub client_id: String,
    pub client_secret: String,
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
    /// Value for the `x-conta-corrente` header, when the credential spans
    /// more than one account.
    pub conta_corrente: Option<String>,
    /// Targets the sandbox host instead of production.
    pub sandbox: bool,
    /// Skips server-certificate verification on the outbound connection.
    pub tls_insecure: bool,
}

impl InterConfig {
    pub fn from_env() -> Result<Self, InterError> {
        Self::from_source(|name| env::var(name).ok())
    }

    pub fn from_source<F>(lookup: F) -> Result<Self, InterError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let client_id = lookup("CLIENT_ID");
        let client_secret = lookup("CLIENT_SECRET");
        let cert_path = lookup("CERT_PATH");
        let key_path = lookup("KEY_PATH");

        let (Some(client_id), Some(client_secret), Some(cert_path), Some(key_path)) =
            (client_id, client_secret, cert_path, key_path)
        else {
            return Err(InterError::Config(
                MENSAGEM_VARIAVEIS_OBRIGATORIAS.to_string(),
            ));
        };

        Ok(Self {
            client_id,
            client_secret,
            cert_path: PathBuf::from(cert_path),
            key_path: PathBuf::from(key_path),
            conta_corrente: lookup("X_CONTA_CORRENTE"),
            sandbox: flag(&lookup, "INTER_IS_SANDBOX"),
            tls_insecure: flag(&lookup, "INTER_TLS_INSECURE"),
        })
    }
}

/// Which transport the MCP handler is served on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Stdio,
    StreamableHttp,
}

/// Transport binding and local storage parameters.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub transport: TransportKind,
    pub host: String,
    pub port: u16,
    pub storage_path: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, InterError> {
        Self::from_source(|name| env::var(name).ok())
    }

    pub fn from_source<F>(lookup: F) -> Result<Self, InterError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let transport = match lookup("MCP_TRANSPORT").as_deref() {
            None | Some("stdio") => TransportKind::Stdio,
            Some("streamable-http") => TransportKind::StreamableHttp,
            Some("sse") => {
                // The SSE endpoint was folded into the streamable-HTTP
                // transport; the old value keeps working as an alias.
                warn!("transport 'sse' is deprecated, serving streamable-http instead");
                TransportKind::StreamableHttp
            }
            Some(outro) => {
                return Err(InterError::Config(format!("Transporte inválido: {outro}")));
            }
        };

        let port = match lookup("MCP_PORT") {
            None => 3000,
            Some(valor) => valor
                .parse::<u16>()
                .map_err(|_| InterError::Config(format!("MCP_PORT inválida: {valor}")))?,
        };

        Ok(Self {
            transport,
            port,
            host: lookup("MCP_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            storage_path: lookup("STORAGE_PATH")
                .map_or_else(|| PathBuf::from("./storage"), PathBuf::from),
        })
    }
}

fn flag<F>(lookup: &F, name: &str) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).as_deref() == Some("true")
}
