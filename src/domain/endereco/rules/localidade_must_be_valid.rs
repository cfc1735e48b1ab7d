use crate::api::domain::business_rule_interface::BusinessRuleInterface;
use crate::core::error::{AppError, AppResult};

pub struct LocalidadeMustBeValid {
    pub localidade: String,
}

impl BusinessRuleInterface for LocalidadeMustBeValid {
    fn check_broken(&self) -> AppResult<()> {
        if self.localidade.is_empty() {
            return Err(AppError::InvalidPayloadError(
                "Informe uma localidade válida".to_string(),
            ));
        }

        Ok(())
    }
}
