use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{watch, Mutex, RwLock};
use tokio::task::JoinHandle;
use uuid::Uuid;
use crate::application::endereco::form_service_interface::EnderecoFormServiceInterface;
use crate::application::endereco::lookup_watcher;
use crate::core::error::{AppError, AppResult};
use crate::domain::endereco::cep_lookup_interface::CepLookupInterface;
use crate::domain::endereco::form::{AvatarFile, FormField, FormModel};
use crate::presentation::endereco::endereco::{
    EnderecoFormSerializer, SubmitEnderecoSerializer, UpdateFieldRequest,
};

struct FormEntry {
    model: Arc<Mutex<FormModel>>,
    cep_tx: watch::Sender<String>,
    watcher: JoinHandle<()>,
}

/// Application service - orchestrates form state, validation and the CEP lookup
pub struct EnderecoFormService {
    lookup_client: Arc<dyn CepLookupInterface>,
    forms: RwLock<HashMap<Uuid, FormEntry>>,
}

impl EnderecoFormService {
    pub fn new(lookup_client: Arc<dyn CepLookupInterface>) -> Self {
        Self {
            lookup_client,
            forms: RwLock::new(HashMap::new()),
        }
    }
}

impl EnderecoFormServiceInterface for EnderecoFormService {
    async fn create_form(&self) -> AppResult<EnderecoFormSerializer> {
        let form_id = Uuid::new_v4();

        // Domain: Fresh form with default field values
        let model = FormModel::new();
        let snapshot = EnderecoFormSerializer::from_model(form_id, &model);

        let model = Arc::new(Mutex::new(model));
        let (cep_tx, cep_rx) = watch::channel(String::new());

        // Reactive side effect: the watcher follows the CEP field for the
        // lifetime of the form
        let watcher = tokio::spawn(lookup_watcher::run(
            cep_rx,
            model.clone(),
            self.lookup_client.clone(),
            form_id,
        ));

        self.forms
            .write()
            .await
            .insert(form_id, FormEntry { model, cep_tx, watcher });

        Ok(snapshot)
    }

    async fn get_form(&self, form_id: Uuid) -> AppResult<EnderecoFormSerializer> {
        let forms = self.forms.read().await;
        let entry = forms.get(&form_id).ok_or_else(|| AppError::EntityNotFoundError {
            detail: format!("Form with id {} not found", form_id),
        })?;

        let model = entry.model.lock().await;
        Ok(EnderecoFormSerializer::from_model(form_id, &model))
    }

    async fn update_field(
        &self,
        form_id: Uuid,
        request: UpdateFieldRequest,
    ) -> AppResult<EnderecoFormSerializer> {
        let forms = self.forms.read().await;
        let entry = forms.get(&form_id).ok_or_else(|| AppError::EntityNotFoundError {
            detail: format!("Form with id {} not found", form_id),
        })?;

        // Domain: Apply the edit, then snapshot with the current field errors
        let mut model = entry.model.lock().await;
        model.set_field(request.field, request.value.clone())?;
        let snapshot = EnderecoFormSerializer::from_model(form_id, &model);
        drop(model);

        // Only a distinct CEP value wakes the watcher
        if request.field == FormField::Cep {
            entry.cep_tx.send_if_modified(|current| {
                if *current == request.value {
                    false
                } else {
                    *current = request.value.clone();
                    true
                }
            });
        }

        Ok(snapshot)
    }

    async fn upload_avatar(
        &self,
        form_id: Uuid,
        avatar: AvatarFile,
    ) -> AppResult<EnderecoFormSerializer> {
        let forms = self.forms.read().await;
        let entry = forms.get(&form_id).ok_or_else(|| AppError::EntityNotFoundError {
            detail: format!("Form with id {} not found", form_id),
        })?;

        let mut model = entry.model.lock().await;
        model.set_avatar(avatar);

        Ok(EnderecoFormSerializer::from_model(form_id, &model))
    }

    async fn submit_form(&self, form_id: Uuid) -> AppResult<SubmitEnderecoSerializer> {
        let forms = self.forms.read().await;
        let entry = forms.get(&form_id).ok_or_else(|| AppError::EntityNotFoundError {
            detail: format!("Form with id {} not found", form_id),
        })?;

        let model = entry.model.lock().await;

        // Domain: Every field rule must pass before the payload is built
        let errors = model.field_errors();
        if !errors.is_empty() {
            return Err(AppError::ValidationError { errors });
        }

        let payload = SubmitEnderecoSerializer::from(&*model);

        // Submission goes no further than the diagnostic log
        match serde_json::to_string(&payload) {
            Ok(json) => log::info!("Form {form_id} submitted: {json}"),
            Err(err) => log::error!("Form {form_id}: failed to serialize submission: {err}"),
        }

        Ok(payload)
    }

    async fn close_form(&self, form_id: Uuid) -> AppResult<bool> {
        let entry = self.forms.write().await.remove(&form_id).ok_or_else(|| {
            AppError::EntityNotFoundError {
                detail: format!("Form with id {} not found", form_id),
            }
        })?;

        // Dropping the sender ends the watcher loop; abort also cancels an
        // in-flight lookup immediately
        entry.watcher.abort();

        Ok(true)
    }
}
