use uuid::Uuid;
use crate::core::error::AppResult;
use crate::domain::endereco::form::AvatarFile;
use crate::presentation::endereco::endereco::{
    EnderecoFormSerializer, SubmitEnderecoSerializer, UpdateFieldRequest,
};

pub trait EnderecoFormServiceInterface: Send + Sync + 'static {
    async fn create_form(&self) -> AppResult<EnderecoFormSerializer>;

    async fn get_form(&self, form_id: Uuid) -> AppResult<EnderecoFormSerializer>;

    async fn update_field(
        &self,
        form_id: Uuid,
        request: UpdateFieldRequest,
    ) -> AppResult<EnderecoFormSerializer>;

    async fn upload_avatar(
        &self,
        form_id: Uuid,
        avatar: AvatarFile,
    ) -> AppResult<EnderecoFormSerializer>;

    async fn submit_form(&self, form_id: Uuid) -> AppResult<SubmitEnderecoSerializer>;

    async fn close_form(&self, form_id: Uuid) -> AppResult<bool>;
}
