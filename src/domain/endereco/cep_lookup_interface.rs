use async_trait::async_trait;
use crate::core::error::AppResult;
use crate::domain::endereco::lookup::EnderecoLookup;

#[async_trait]
pub trait CepLookupInterface: Send + Sync + 'static {
    async fn lookup_cep(&self, cep: &str) -> AppResult<EnderecoLookup>;
}
