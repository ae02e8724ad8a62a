//! Authenticated HTTP client for banco Inter's REST API.
//!
//! `InterClient` owns the whole outbound side of the server:
//! - a `reqwest` client carrying the mutual-TLS identity (PFX-style PEM
//!   certificate + key) with a 30 second overall timeout,
//! - OAuth2 client-credentials authentication against `/oauth/v2/token`,
//!   with the bearer token cached until 60 seconds before expiry,
//! - one `async` method per remote banking operation, each issuing
//!   exactly one HTTP request with no retries.
//!
//! Responses are passed through as `serde_json::Value` (or raw bytes for
//! the PDF endpoints) so the tool layer can return the remote payload
//! verbatim.

use std::fs;
use std::time::Duration;

use http::Extensions;
use oauth2::basic::BasicClient;
use oauth2::{
    AuthType, ClientId, ClientSecret, EndpointNotSet, EndpointSet, Scope, TokenResponse, TokenUrl,
};
use reqwest::{Method, Request, Response};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, Result as MiddlewareResult};
use reqwest_tracing::{
    ReqwestOtelSpanBackend, TracingMiddleware, default_on_request_end, reqwest_otel_span,
};
use serde::Serialize;
use serde_json::{Value, json};
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{Span, debug, info};

use crate::config::InterConfig;
use crate::mcp::error::InterError;
use crate::mcp::types::{EmitirCobrancaRequest, ListaCobrancasFiltro, SumarioCobrancasFiltro};

const PRODUCTION_BASE_URL: &str = "https://cdpj.partners.bancointer.com.br";
const SANDBOX_BASE_URL: &str = "https://cdpj-sandbox.partners.uatinter.co";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Tokens are treated as expired this long before the remote expiry.
const TOKEN_MARGIN: Duration = Duration::from_secs(60);
/// Inter documents 3600 s tokens; used when the response omits `expires_in`.
const DEFAULT_EXPIRES_IN: Duration = Duration::from_secs(3600);

const SCOPES: [&str; 4] = [
    "boleto-cobranca.read",
    "boleto-cobranca.write",
    "extrato.read",
    "saldo.read",
];

// Custom tracing backend for reqwest. Unlike the usual example, neither
// the request body nor the headers are recorded: both carry credentials
// (client_secret on the token request, bearer token everywhere else).
struct InterSpanBackend;

impl ReqwestOtelSpanBackend for InterSpanBackend {
    fn on_request_start(req: &Request, _extension: &mut Extensions) -> Span {
        reqwest_otel_span!(name = "inter-api-request", req)
    }

    fn on_request_end(
        span: &Span,
        outcome: &MiddlewareResult<Response>,
        _extension: &mut Extensions,
    ) {
        default_on_request_end(span, outcome);
    }
}

struct CachedToken {
    value: String,
    expires_at: Instant,
}

type TokenClient =
    BasicClient<EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

pub struct InterClient {
    http: ClientWithMiddleware,
    /// Plain client handed to the oauth2 crate for the token request; the
    /// same underlying connection pool (and mTLS identity) as `http`.
    token_http: reqwest::Client,
    oauth: TokenClient,
    base_url: String,
    conta_corrente: Option<String>,
    token: RwLock<Option<CachedToken>>,
}

impl InterClient {
    pub fn new(config: &InterConfig) -> Result<Self, InterError> {
        let base_url = if config.sandbox {
            SANDBOX_BASE_URL
        } else {
            PRODUCTION_BASE_URL
        };
        Self::with_base_url(config, base_url)
    }

    /// Same construction as [`InterClient::new`] against an arbitrary
    /// host. Test seam.
    pub fn with_base_url(config: &InterConfig, base_url: &str) -> Result<Self, InterError> {
        let base_url = base_url.trim_end_matches('/').to_string();

        let certificado = fs::read(&config.cert_path).map_err(|e| {
            InterError::Config(format!(
                "falha ao ler o certificado {}: {e}",
                config.cert_path.display()
            ))
        })?;
        let chave = fs::read(&config.key_path).map_err(|e| {
            InterError::Config(format!(
                "falha ao ler a chave privada {}: {e}",
                config.key_path.display()
            ))
        })?;
        let mut pem = certificado;
        pem.extend_from_slice(&chave);
        let identity = reqwest::Identity::from_pem(&pem)
            .map_err(|e| InterError::Config(format!("certificado mTLS inválido: {e}")))?;

        let mut builder = reqwest::Client::builder()
            .identity(identity)
            .timeout(REQUEST_TIMEOUT)
            .redirect(reqwest::redirect::Policy::none());
        if config.tls_insecure {
            // The upstream integration this replaces skipped verification
            // unconditionally ("often needed for Inter's sandbox certs").
            // Here it is opt-in via INTER_TLS_INSECURE and off by default.
            builder = builder.danger_accept_invalid_certs(true);
        }
        let token_http = builder.build()?;

        let http = ClientBuilder::new(token_http.clone())
            .with(TracingMiddleware::<InterSpanBackend>::new())
            .build();

        let token_url = TokenUrl::new(format!("{base_url}/oauth/v2/token"))
            .map_err(|e| InterError::Config(format!("URL do token inválida: {e}")))?;
        let oauth = BasicClient::new(ClientId::new(config.client_id.clone()))
            .set_client_secret(ClientSecret::new(config.client_secret.clone()))
            .set_token_uri(token_url)
            // Inter expects client_id/client_secret in the form body, not
            // in an HTTP Basic header.
            .set_auth_type(AuthType::RequestBody);

        info!(%base_url, "Inter client initialized");

        Ok(Self {
            http,
            token_http,
            oauth,
            base_url,
            conta_corrente: config.conta_corrente.clone(),
            token: RwLock::new(None),
        })
    }

    /// Returns the cached bearer token, requesting a fresh one when the
    /// cache is empty or past its margin-adjusted expiry.
    ///
    /// The token request runs without holding the write lock, so two
    /// concurrent expired calls may both authenticate; the second write
    /// overwrites the first, which is harmless.
    async fn authenticate(&self) -> Result<String, InterError> {
        if let Some(cached) = self.token.read().await.as_ref() {
            if Instant::now() < cached.expires_at {
                return Ok(cached.value.clone());
            }
        }

        debug!("requesting new access token");
        let mut exchange = self.oauth.exchange_client_credentials();
        for scope in SCOPES {
            exchange = exchange.add_scope(Scope::new(scope.to_string()));
        }
        let response = exchange
            .request_async(&self.token_http)
            .await
            .map_err(|e| InterError::Auth(e.to_string()))?;

        let value = response.access_token().secret().clone();
        let expires_in = response.expires_in().unwrap_or(DEFAULT_EXPIRES_IN);
        let expires_at = Instant::now() + expires_in.saturating_sub(TOKEN_MARGIN);

        *self.token.write().await = Some(CachedToken {
            value: value.clone(),
            expires_at,
        });
        debug!(valid_for = ?expires_in, "access token refreshed");
        Ok(value)
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
    ) -> Result<reqwest_middleware::RequestBuilder, InterError> {
        let token = self.authenticate().await?;
        let mut builder = self
            .http
            .request(method, format!("{}{path}", self.base_url))
            .bearer_auth(token);
        if let Some(conta) = &self.conta_corrente {
            builder = builder.header("x-conta-corrente", conta);
        }
        Ok(builder)
    }

    async fn send(builder: reqwest_middleware::RequestBuilder) -> Result<Response, InterError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(InterError::Api { status, body })
    }

    async fn get_json<Q>(&self, path: &str, query: Option<&Q>) -> Result<Value, InterError>
    where
        Q: Serialize + ?Sized,
    {
        let mut builder = self.request(Method::GET, path).await?;
        if let Some(query) = query {
            builder = builder.query(query);
        }
        Ok(Self::send(builder).await?.json().await?)
    }

    /// GET `/banking/v2/saldo`.
    pub async fn saldo(&self) -> Result<Value, InterError> {
        self.get_json::<()>("/banking/v2/saldo", None).await
    }

    /// GET `/banking/v2/extrato`. The remote query parameters are named
    /// `dataInicio`/`dataFim`, unlike the `dataInicial`/`dataFinal` the
    /// tools accept.
    pub async fn extrato(
        &self,
        data_inicial: &str,
        data_final: &str,
    ) -> Result<Value, InterError> {
        self.get_json(
            "/banking/v2/extrato",
            Some(&[("dataInicio", data_inicial), ("dataFim", data_final)]),
        )
        .await
    }

    /// GET `/banking/v2/extrato/exportar`, returning the raw PDF bytes.
    pub async fn extrato_pdf(
        &self,
        data_inicial: &str,
        data_final: &str,
    ) -> Result<Vec<u8>, InterError> {
        let builder = self
            .request(Method::GET, "/banking/v2/extrato/exportar")
            .await?
            .query(&[("dataInicio", data_inicial), ("dataFim", data_final)]);
        Ok(Self::send(builder).await?.bytes().await?.to_vec())
    }

    /// GET `/cobranca/v3/cobrancas`, paginated listing.
    pub async fn listar_cobrancas(
        &self,
        filtro: &ListaCobrancasFiltro,
    ) -> Result<Value, InterError> {
        self.get_json("/cobranca/v3/cobrancas", Some(filtro)).await
    }

    /// POST `/cobranca/v3/cobrancas`. The response carries the
    /// server-assigned `codigoSolicitacao`.
    pub async fn emitir_cobranca(
        &self,
        pedido: &EmitirCobrancaRequest,
    ) -> Result<Value, InterError> {
        let builder = self
            .request(Method::POST, "/cobranca/v3/cobrancas")
            .await?
            .json(pedido);
        Ok(Self::send(builder).await?.json().await?)
    }

    /// GET `/cobranca/v3/cobrancas/{codigo}`, charge detail.
    pub async fn cobranca(&self, codigo_solicitacao: &str) -> Result<Value, InterError> {
        self.get_json::<()>(&format!("/cobranca/v3/cobrancas/{codigo_solicitacao}"), None)
            .await
    }

    /// GET `/cobranca/v3/cobrancas/{codigo}/pdf`. The endpoint answers
    /// JSON with the document under a `pdf` key, base64-encoded; the
    /// encoded string is returned as-is.
    pub async fn cobranca_pdf(&self, codigo_solicitacao: &str) -> Result<String, InterError> {
        let resposta = self
            .get_json::<()>(
                &format!("/cobranca/v3/cobrancas/{codigo_solicitacao}/pdf"),
                None,
            )
            .await?;
        resposta
            .get("pdf")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                InterError::UnexpectedResponse("campo 'pdf' ausente na resposta".to_string())
            })
    }

    /// POST `/cobranca/v3/cobrancas/{codigo}/cancelar`.
    pub async fn cancelar_cobranca(
        &self,
        codigo_solicitacao: &str,
        motivo: &str,
    ) -> Result<(), InterError> {
        let builder = self
            .request(
                Method::POST,
                &format!("/cobranca/v3/cobrancas/{codigo_solicitacao}/cancelar"),
            )
            .await?
            .json(&json!({ "motivoCancelamento": motivo }));
        Self::send(builder).await?;
        Ok(())
    }

    /// PATCH `/cobranca/v3/cobrancas/{codigo}` with a partial charge body.
    pub async fn editar_cobranca(
        &self,
        codigo_solicitacao: &str,
        alteracao: &Value,
    ) -> Result<(), InterError> {
        let builder = self
            .request(
                Method::PATCH,
                &format!("/cobranca/v3/cobrancas/{codigo_solicitacao}"),
            )
            .await?
            .json(alteracao);
        Self::send(builder).await?;
        Ok(())
    }

    /// GET `/cobranca/v3/cobrancas/sumario`, totals per charge status.
    pub async fn sumario_cobrancas(
        &self,
        filtro: &SumarioCobrancasFiltro,
    ) -> Result<Value, InterError> {
        self.get_json("/cobranca/v3/cobrancas/sumario", Some(filtro))
            .await
    }
}
