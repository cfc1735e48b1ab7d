use async_trait::async_trait;
use serde::Deserialize;
use crate::core::configure::ViaCepConfig;
use crate::core::error::{AppError, AppResult};
use crate::domain::endereco::cep_lookup_interface::CepLookupInterface;
use crate::domain::endereco::lookup::EnderecoLookup;

/// Wire shape of the public lookup endpoint. Unknown CEPs come back as
/// `{ "erro": true }` with none of the address fields.
#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    logradouro: Option<String>,
    bairro: Option<String>,
    localidade: Option<String>,
    uf: Option<String>,
    #[serde(default)]
    erro: Option<bool>,
}

pub struct ViaCepClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ViaCepClient {
    pub fn new(config: &ViaCepConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl CepLookupInterface for ViaCepClient {
    async fn lookup_cep(&self, cep: &str) -> AppResult<EnderecoLookup> {
        // The CEP is templated into the URL as typed; no sanitization.
        let url = format!("{}/ws/{}/json/", self.base_url, cep);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|err| AppError::ExternalServiceError(format!("ViaCEP request failed: {err}")))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "ViaCEP returned status {}",
                response.status()
            )));
        }

        let payload: ViaCepResponse = response.json().await.map_err(|err| {
            AppError::ExternalServiceError(format!(
                "ViaCEP response did not match the expected shape: {err}"
            ))
        })?;

        if payload.erro.unwrap_or(false) {
            return Err(AppError::EntityNotFoundError {
                detail: format!("CEP {cep} não encontrado"),
            });
        }

        let logradouro = payload.logradouro.ok_or_else(|| {
            AppError::ExternalServiceError("ViaCEP response is missing logradouro".to_string())
        })?;
        let bairro = payload.bairro.ok_or_else(|| {
            AppError::ExternalServiceError("ViaCEP response is missing bairro".to_string())
        })?;
        let localidade = payload.localidade.ok_or_else(|| {
            AppError::ExternalServiceError("ViaCEP response is missing localidade".to_string())
        })?;
        let uf = payload.uf.ok_or_else(|| {
            AppError::ExternalServiceError("ViaCEP response is missing uf".to_string())
        })?;

        Ok(EnderecoLookup { logradouro, bairro, localidade, uf })
    }
}
