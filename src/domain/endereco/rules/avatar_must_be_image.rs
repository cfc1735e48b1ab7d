use crate::api::domain::business_rule_interface::BusinessRuleInterface;
use crate::core::error::{AppError, AppResult};

pub struct AvatarMustBeImage {
    pub file_name: String,
    pub content_type: String,
}

impl BusinessRuleInterface for AvatarMustBeImage {
    fn check_broken(&self) -> AppResult<()> {
        if self.file_name.is_empty() {
            return Err(AppError::InvalidPayloadError("Envie uma imagem válida".to_string()));
        }

        if !self.content_type.starts_with("image/") {
            return Err(AppError::InvalidPayloadError("Envie uma imagem válida".to_string()));
        }

        Ok(())
    }
}
