use serde::{Deserialize, Serialize};

/// Resolved address data for one CEP, as returned by the lookup provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnderecoLookup {
    pub logradouro: String,
    pub bairro: String,
    pub localidade: String,
    pub uf: String,
}
