use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use crate::presentation::endereco::endereco::FieldErrorSerializer;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct EntityResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub total: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ClientResponseError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_errors: Vec<FieldErrorSerializer>,
}
