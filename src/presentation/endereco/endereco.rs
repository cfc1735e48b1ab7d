use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use crate::core::error::AppError;
use crate::domain::endereco::form::{AvatarFile, FormField, FormModel};

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct FieldErrorSerializer {
    pub field: String,
    pub message: String,
}

impl FieldErrorSerializer {
    pub fn new(field: FormField, error: &AppError) -> Self {
        FieldErrorSerializer {
            field: format!("endereco.{}", field),
            message: error.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct AvatarSerializer {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

impl From<AvatarFile> for AvatarSerializer {
    fn from(value: AvatarFile) -> Self {
        AvatarSerializer {
            file_name: value.file_name,
            content_type: value.content_type,
            size_bytes: value.size_bytes,
        }
    }
}

/// Current field values of a form, as typed (numero still raw text).
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct EnderecoCamposSerializer {
    pub cep: String,
    pub avatar: AvatarSerializer,
    pub rua: String,
    pub numero: String,
    pub bairro: String,
    pub localidade: String,
}

impl From<&FormModel> for EnderecoCamposSerializer {
    fn from(value: &FormModel) -> Self {
        EnderecoCamposSerializer {
            cep: value.cep.clone(),
            avatar: AvatarSerializer::from(value.avatar.clone()),
            rua: value.rua.clone(),
            numero: value.numero.clone(),
            bairro: value.bairro.clone(),
            localidade: value.localidade.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct EnderecoFormSerializer {
    pub form_id: Uuid,
    pub endereco: EnderecoCamposSerializer,
    pub errors: Vec<FieldErrorSerializer>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl EnderecoFormSerializer {
    pub fn from_model(form_id: Uuid, model: &FormModel) -> Self {
        EnderecoFormSerializer {
            form_id,
            endereco: EnderecoCamposSerializer::from(model),
            errors: model.field_errors(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema, Clone)]
pub struct UpdateFieldRequest {
    pub field: FormField,
    pub value: String,
}

/// Validated and coerced field set, nested under the form's payload key.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct EnderecoValidadoSerializer {
    pub cep: String,
    pub avatar: AvatarSerializer,
    pub rua: String,
    pub numero: i64,
    pub bairro: String,
    pub localidade: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct SubmitEnderecoSerializer {
    pub endereco: EnderecoValidadoSerializer,
}

impl From<&FormModel> for SubmitEnderecoSerializer {
    fn from(value: &FormModel) -> Self {
        SubmitEnderecoSerializer {
            endereco: EnderecoValidadoSerializer {
                cep: value.cep.clone(),
                avatar: AvatarSerializer::from(value.avatar.clone()),
                rua: value.rua.clone(),
                numero: value.numero_coerced(),
                bairro: value.bairro.clone(),
                localidade: value.localidade.clone(),
            },
        }
    }
}
