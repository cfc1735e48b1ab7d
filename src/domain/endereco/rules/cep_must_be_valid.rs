use crate::api::domain::business_rule_interface::BusinessRuleInterface;
use crate::core::error::{AppError, AppResult};
use crate::domain::endereco::form::CEP_LENGTH;

pub struct CepMustBeValid {
    pub cep: String,
}

impl BusinessRuleInterface for CepMustBeValid {
    fn check_broken(&self) -> AppResult<()> {
        if self.cep.chars().count() < CEP_LENGTH {
            return Err(AppError::InvalidPayloadError("Informe um CEP válido".to_string()));
        }

        Ok(())
    }
}
