use crate::api::domain::business_rule_interface::BusinessRuleInterface;
use crate::core::error::{AppError, AppResult};

pub struct RuaMustBeValid {
    pub rua: String,
}

impl BusinessRuleInterface for RuaMustBeValid {
    fn check_broken(&self) -> AppResult<()> {
        if self.rua.is_empty() {
            return Err(AppError::InvalidPayloadError("Informe uma rua válida".to_string()));
        }

        Ok(())
    }
}
