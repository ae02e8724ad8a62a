//! Request shapes shared between the tools and the API client.
//!
//! Field names serialize in camelCase because that is what the Inter API
//! (and therefore the declared tool schemas) speak. Schema constraints
//! such as `seuNumero`'s length or `valorNominal`'s minimum are carried in
//! the generated JSON schema only; the remote service is the authority
//! that enforces them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Status of a charge, as reported and filtered by the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SituacaoCobranca {
    Recebido,
    AReceber,
    Atrasado,
    Cancelado,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoPessoa {
    Fisica,
    Juridica,
}

/// Which date the charge listing filters and sorts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FiltrarDataPor {
    Vencimento,
    Emissao,
    Situacao,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrdenarCobrancasPor {
    PessoaPagadora,
    DataEmissao,
    DataVencimento,
    Valor,
    Situacao,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoOrdenacao {
    Asc,
    Desc,
}

/// Identity of the person or company the boleto is issued against. The
/// remote API requires every field.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagador {
    #[schemars(description = "CPF ou CNPJ do pagador, somente dígitos")]
    pub cpf_cnpj: String,
    pub tipo_pessoa: TipoPessoa,
    pub nome: String,
    pub endereco: String,
    pub bairro: String,
    pub cidade: String,
    #[schemars(description = "Sigla da unidade federativa, ex.: SP")]
    pub uf: String,
    pub cep: String,
}

/// Discount schedule applied before the due date.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Desconto {
    #[schemars(
        description = "Tipo do desconto, ex.: PERCENTUALDATAINFORMADA, VALORFIXODATAINFORMADA, NAOTEMDESCONTO"
    )]
    pub codigo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantidade_dias: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxa: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor: Option<f64>,
}

/// Fine charged after the due date.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Multa {
    #[schemars(description = "Tipo da multa: NAOTEMMULTA, VALORFIXO ou PERCENTUAL")]
    pub codigo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxa: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor: Option<f64>,
}

/// Daily or monthly interest accrued after the due date.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Mora {
    #[schemars(description = "Tipo da mora: ISENTO, VALORDIA ou TAXAMENSAL")]
    pub codigo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxa: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor: Option<f64>,
}

/// Free-text lines printed on the boleto.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Mensagem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linha1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linha2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linha3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linha4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linha5: Option<String>,
}

/// Body of a charge issuance request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmitirCobrancaRequest {
    #[schemars(description = "Identificador do boleto para o beneficiário", length(max = 15))]
    pub seu_numero: String,
    #[schemars(description = "Valor nominal em reais", range(min = 2.5))]
    pub valor_nominal: f64,
    #[schemars(description = "Data de vencimento no formato YYYY-MM-DD")]
    pub data_vencimento: String,
    pub pagador: Pagador,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desconto: Option<Desconto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multa: Option<Multa>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mora: Option<Mora>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mensagem: Option<Mensagem>,
}

/// Query parameters for the charge listing endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListaCobrancasFiltro {
    pub data_inicial: String,
    pub data_final: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub situacao: Option<SituacaoCobranca>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filtrar_data_por: Option<FiltrarDataPor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagina_atual: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itens_por_pagina: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordenar_por: Option<OrdenarCobrancasPor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_ordenacao: Option<TipoOrdenacao>,
}

impl ListaCobrancasFiltro {
    /// Filter covering a date range, everything else unset.
    pub fn periodo(data_inicial: impl Into<String>, data_final: impl Into<String>) -> Self {
        Self {
            data_inicial: data_inicial.into(),
            data_final: data_final.into(),
            situacao: None,
            filtrar_data_por: None,
            pagina_atual: None,
            itens_por_pagina: None,
            ordenar_por: None,
            tipo_ordenacao: None,
        }
    }
}

/// Query parameters for the charge summary endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SumarioCobrancasFiltro {
    pub data_inicial: String,
    pub data_final: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub situacao: Option<SituacaoCobranca>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filtrar_data_por: Option<FiltrarDataPor>,
}

impl SumarioCobrancasFiltro {
    pub fn periodo(data_inicial: impl Into<String>, data_final: impl Into<String>) -> Self {
        Self {
            data_inicial: data_inicial.into(),
            data_final: data_final.into(),
            situacao: None,
            filtrar_data_por: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn situacao_uses_remote_wire_values() {
        assert_eq!(
            serde_json::to_value(SituacaoCobranca::AReceber).unwrap(),
            json!("A_RECEBER")
        );
        assert_eq!(
            serde_json::to_value(SituacaoCobranca::Recebido).unwrap(),
            json!("RECEBIDO")
        );
        assert_eq!(
            serde_json::from_value::<SituacaoCobranca>(json!("ATRASADO")).unwrap(),
            SituacaoCobranca::Atrasado
        );
    }

    #[test]
    fn emitir_request_serializes_camel_case() {
        let pedido = EmitirCobrancaRequest {
            seu_numero: "FAT-0001".to_string(),
            valor_nominal: 150.0,
            data_vencimento: "2024-12-31".to_string(),
            pagador: Pagador {
                cpf_cnpj: "12345678901".to_string(),
                tipo_pessoa: TipoPessoa::Fisica,
                nome: "Maria Silva".to_string(),
                endereco: "Rua das Flores 100".to_string(),
                bairro: "Centro".to_string(),
                cidade: "Belo Horizonte".to_string(),
                uf: "MG".to_string(),
                cep: "30110000".to_string(),
            },
            desconto: None,
            multa: None,
            mora: None,
            mensagem: None,
        };

        let valor = serde_json::to_value(&pedido).unwrap();
        assert_eq!(valor["seuNumero"], json!("FAT-0001"));
        assert_eq!(valor["valorNominal"], json!(150.0));
        assert_eq!(valor["dataVencimento"], json!("2024-12-31"));
        assert_eq!(valor["pagador"]["cpfCnpj"], json!("12345678901"));
        assert_eq!(valor["pagador"]["tipoPessoa"], json!("FISICA"));

        // Unset optional blocks must not appear in the body at all.
        let objeto = valor.as_object().unwrap();
        assert!(!objeto.contains_key("desconto"));
        assert!(!objeto.contains_key("mensagem"));
    }

    #[test]
    fn emitir_request_parses_tool_arguments() {
        let pedido: EmitirCobrancaRequest = serde_json::from_value(json!({
            "seuNumero": "NF-42",
            "valorNominal": 99.9,
            "dataVencimento": "2025-01-15",
            "pagador": {
                "cpfCnpj": "11222333000144",
                "tipoPessoa": "JURIDICA",
                "nome": "Padaria Pão Quente LTDA",
                "endereco": "Av. Brasil 1500",
                "bairro": "Savassi",
                "cidade": "Belo Horizonte",
                "uf": "MG",
                "cep": "30130000"
            },
            "multa": { "codigo": "PERCENTUAL", "taxa": 2.0 }
        }))
        .unwrap();

        assert_eq!(pedido.pagador.tipo_pessoa, TipoPessoa::Juridica);
        assert_eq!(pedido.multa.unwrap().taxa, Some(2.0));
        assert!(pedido.desconto.is_none());
    }

    #[test]
    fn filtro_omits_unset_parameters() {
        let mut filtro = ListaCobrancasFiltro::periodo("2024-01-01", "2024-01-31");
        filtro.situacao = Some(SituacaoCobranca::Atrasado);

        let valor = serde_json::to_value(&filtro).unwrap();
        let objeto = valor.as_object().unwrap();
        assert_eq!(objeto.len(), 3);
        assert_eq!(valor["dataInicial"], json!("2024-01-01"));
        assert_eq!(valor["dataFinal"], json!("2024-01-31"));
        assert_eq!(valor["situacao"], json!("ATRASADO"));
    }

    #[test]
    fn filtro_serializes_pagination_and_sorting() {
        let mut filtro = ListaCobrancasFiltro::periodo("2024-02-01", "2024-02-29");
        filtro.filtrar_data_por = Some(FiltrarDataPor::Emissao);
        filtro.pagina_atual = Some(0);
        filtro.itens_por_pagina = Some(50);
        filtro.ordenar_por = Some(OrdenarCobrancasPor::DataVencimento);
        filtro.tipo_ordenacao = Some(TipoOrdenacao::Desc);

        let valor = serde_json::to_value(&filtro).unwrap();
        assert_eq!(valor["filtrarDataPor"], json!("EMISSAO"));
        assert_eq!(valor["paginaAtual"], json!(0));
        assert_eq!(valor["itensPorPagina"], json!(50));
        assert_eq!(valor["ordenarPor"], json!("DATA_VENCIMENTO"));
        assert_eq!(valor["tipoOrdenacao"], json!("DESC"));
    }
}
