use async_trait::async_trait;
use cadastro_backend::core::error::{AppError, AppResult};
use cadastro_backend::domain::endereco::cep_lookup_interface::CepLookupInterface;
use cadastro_backend::domain::endereco::lookup::EnderecoLookup;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// A lookup result the mock provider serves for one CEP, after an optional
/// delay (used to keep a lookup in flight while the test edits the form).
#[derive(Debug, Clone)]
pub struct CannedLookup {
    pub delay: Duration,
    pub result: Result<EnderecoLookup, String>,
}

#[derive(Default)]
pub struct MockCepLookup {
    responses: Mutex<HashMap<String, CannedLookup>>,
    calls: Mutex<Vec<String>>,
}

impl MockCepLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, cep: &str, lookup: EnderecoLookup) -> Self {
        self.with_canned(
            cep,
            CannedLookup {
                delay: Duration::ZERO,
                result: Ok(lookup),
            },
        )
    }

    pub fn with_canned(self, cep: &str, canned: CannedLookup) -> Self {
        self.responses
            .lock()
            .expect("responses lock poisoned")
            .insert(cep.to_string(), canned);
        self
    }

    /// Every CEP the provider was asked to resolve, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }
}

#[async_trait]
impl CepLookupInterface for MockCepLookup {
    async fn lookup_cep(&self, cep: &str) -> AppResult<EnderecoLookup> {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(cep.to_string());

        let canned = self
            .responses
            .lock()
            .expect("responses lock poisoned")
            .get(cep)
            .cloned();

        let Some(canned) = canned else {
            return Err(AppError::EntityNotFoundError {
                detail: format!("CEP {cep} não encontrado"),
            });
        };

        if !canned.delay.is_zero() {
            tokio::time::sleep(canned.delay).await;
        }

        canned.result.map_err(AppError::ExternalServiceError)
    }
}

pub fn sample_lookup() -> EnderecoLookup {
    EnderecoLookup {
        logradouro: "Avenida Paulista".to_string(),
        bairro: "Bela Vista".to_string(),
        localidade: "São Paulo".to_string(),
        uf: "SP".to_string(),
    }
}

/// Helper to wait for async operations
pub async fn wait_for_condition<F, Fut>(mut check: F, max_attempts: u32) -> bool
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = bool>,
{
    for _ in 0..max_attempts {
        if check().await {
            return true;
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
    }
    false
}
