use crate::api::domain::business_rule_interface::BusinessRuleInterface;
use crate::core::error::{AppError, AppResult};

/// House numbers arrive as free text and are coerced before the minimum check.
pub struct NumeroMustBeValid {
    pub numero: String,
}

impl BusinessRuleInterface for NumeroMustBeValid {
    fn check_broken(&self) -> AppResult<()> {
        let coerced: i64 = self
            .numero
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidPayloadError("Informe um número válido".to_string()))?;

        if coerced < 1 {
            return Err(AppError::InvalidPayloadError("Informe um número válido".to_string()));
        }

        Ok(())
    }
}
