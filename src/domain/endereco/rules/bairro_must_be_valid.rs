use crate::api::domain::business_rule_interface::BusinessRuleInterface;
use crate::core::error::{AppError, AppResult};

pub struct BairroMustBeValid {
    pub bairro: String,
}

impl BusinessRuleInterface for BairroMustBeValid {
    fn check_broken(&self) -> AppResult<()> {
        if self.bairro.is_empty() {
            return Err(AppError::InvalidPayloadError("Informe um bairro válido".to_string()));
        }

        Ok(())
    }
}
