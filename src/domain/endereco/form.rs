use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::ToSchema;
use crate::api::domain::business_rule_interface::BusinessRuleInterface;
use crate::core::error::{AppError, AppResult};
use crate::domain::endereco::lookup::EnderecoLookup;
use crate::domain::endereco::rules::*;
use crate::presentation::endereco::endereco::FieldErrorSerializer;

/// A CEP drives the address lookup only when fully typed.
pub const CEP_LENGTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FormField {
    Cep,
    Avatar,
    Rua,
    Numero,
    Bairro,
    Localidade,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarFile {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

impl AvatarFile {
    /// Placeholder file the form starts with, so an untouched form carries
    /// a value for the required avatar field.
    pub fn placeholder() -> Self {
        Self {
            file_name: "dummy.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            size_bytes: 0,
        }
    }
}

/// In-memory state of one address registration form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormModel {
    pub cep: String,
    pub avatar: AvatarFile,
    pub rua: String,
    pub numero: String,
    pub bairro: String,
    pub localidade: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl FormModel {
    pub fn new() -> Self {
        let now = Utc::now().naive_utc();
        Self {
            cep: String::new(),
            avatar: AvatarFile::placeholder(),
            rua: String::new(),
            numero: "0".to_string(),
            bairro: String::new(),
            localidade: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: String) -> AppResult<()> {
        match field {
            FormField::Cep => self.cep = value,
            FormField::Rua => self.rua = value,
            FormField::Numero => self.numero = value,
            FormField::Bairro => self.bairro = value,
            FormField::Localidade => self.localidade = value,
            FormField::Avatar => {
                return Err(AppError::BadRequestError(
                    "O campo avatar deve ser enviado por upload".to_string(),
                ));
            },
        }
        self.updated_at = Utc::now().naive_utc();
        Ok(())
    }

    pub fn set_avatar(&mut self, avatar: AvatarFile) {
        self.avatar = avatar;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Merge a resolved CEP into the form. Only the three derived fields are
    /// overwritten; the fields are not marked as user edits.
    pub fn apply_lookup(&mut self, lookup: &EnderecoLookup) {
        self.bairro = lookup.bairro.clone();
        self.rua = lookup.logradouro.clone();
        self.localidade = format!("{}, {}", lookup.localidade, lookup.uf);
    }

    /// Runs every field rule and collects the broken ones, keyed by field.
    pub fn field_errors(&self) -> Vec<FieldErrorSerializer> {
        let mut errors = Vec::new();

        if let Err(err) = (CepMustBeValid { cep: self.cep.clone() }).check_broken() {
            errors.push(FieldErrorSerializer::new(FormField::Cep, &err));
        }

        if let Err(err) = (AvatarMustBeImage {
            file_name: self.avatar.file_name.clone(),
            content_type: self.avatar.content_type.clone(),
        })
        .check_broken()
        {
            errors.push(FieldErrorSerializer::new(FormField::Avatar, &err));
        }

        if let Err(err) = (RuaMustBeValid { rua: self.rua.clone() }).check_broken() {
            errors.push(FieldErrorSerializer::new(FormField::Rua, &err));
        }

        if let Err(err) = (NumeroMustBeValid { numero: self.numero.clone() }).check_broken() {
            errors.push(FieldErrorSerializer::new(FormField::Numero, &err));
        }

        if let Err(err) = (BairroMustBeValid { bairro: self.bairro.clone() }).check_broken() {
            errors.push(FieldErrorSerializer::new(FormField::Bairro, &err));
        }

        if let Err(err) =
            (LocalidadeMustBeValid { localidade: self.localidade.clone() }).check_broken()
        {
            errors.push(FieldErrorSerializer::new(FormField::Localidade, &err));
        }

        errors
    }

    /// The coerced house number, once validation has passed.
    pub fn numero_coerced(&self) -> i64 {
        self.numero.trim().parse().unwrap_or_default()
    }
}

impl Default for FormModel {
    fn default() -> Self {
        Self::new()
    }
}
