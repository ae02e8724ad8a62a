//! Filesystem storage for downloaded PDFs.
//!
//! File names are deterministic (`boleto_<codigo>.pdf`,
//! `extrato_<inicio>_<fim>.pdf`) and built only from validated inputs, so
//! a tool argument can never escape the storage directory. The directory
//! itself is created once, at construction.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::mcp::error::InterError;

pub struct PdfStorage {
    dir: PathBuf,
}

impl PdfStorage {
    /// Creates the storage directory (including parents) if absent.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, InterError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Destination for a charge PDF. Fails before any network call when
    /// the request code is not a plain `[A-Za-z0-9-]+` token.
    pub fn caminho_boleto(&self, codigo_solicitacao: &str) -> Result<PathBuf, InterError> {
        validar_codigo(codigo_solicitacao)?;
        Ok(self.dir.join(format!("boleto_{codigo_solicitacao}.pdf")))
    }

    /// Destination for a statement PDF. Both dates must be `YYYY-MM-DD`.
    pub fn caminho_extrato(
        &self,
        data_inicial: &str,
        data_final: &str,
    ) -> Result<PathBuf, InterError> {
        validar_data(data_inicial)?;
        validar_data(data_final)?;
        Ok(self.dir.join(format!("extrato_{data_inicial}_{data_final}.pdf")))
    }

    pub async fn salvar(&self, caminho: &Path, conteudo: &[u8]) -> Result<(), InterError> {
        tokio::fs::write(caminho, conteudo).await?;
        Ok(())
    }
}

fn validar_codigo(codigo: &str) -> Result<(), InterError> {
    let valido = !codigo.is_empty()
        && codigo
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');
    if valido {
        Ok(())
    } else {
        Err(InterError::InvalidParams(format!(
            "Código de solicitação inválido: {codigo}"
        )))
    }
}

fn validar_data(data: &str) -> Result<(), InterError> {
    NaiveDate::parse_from_str(data, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| {
            InterError::InvalidParams(format!("Data inválida (esperado YYYY-MM-DD): {data}"))
        })
}
