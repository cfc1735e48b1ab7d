use std::sync::Arc;
use crate::application::endereco::form_service::EnderecoFormService;
use crate::core::configure::AppConfig;
use crate::core::error::AppResult;
use crate::infrastructure::viacep::viacep_client::ViaCepClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub lookup_client: Arc<ViaCepClient>,
    pub endereco_service: Arc<EnderecoFormService>,
}

impl AppState {
    pub async fn new(config: AppConfig) -> AppResult<Self> {
        let config = Arc::new(config);

        let lookup_client = Arc::new(ViaCepClient::new(&config.viacep));
        let endereco_service = Arc::new(EnderecoFormService::new(lookup_client.clone()));

        Ok(Self {
            config,
            lookup_client,
            endereco_service,
        })
    }
}
