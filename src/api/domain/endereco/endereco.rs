use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;
use crate::application::endereco::form_service_interface::EnderecoFormServiceInterface;
use crate::core::app_state::AppState;
use crate::core::error::{AppError, AppResult};
use crate::core::response::{ClientResponseError, EntityResponse};
use crate::domain::endereco::form::AvatarFile;
use crate::presentation::endereco::endereco::{
    EnderecoFormSerializer, SubmitEnderecoSerializer, UpdateFieldRequest,
};

#[utoipa::path(
    post,
    path = "/v1/enderecos/forms",
    tags = ["endereco_service"],
    responses(
        (status = 201, description = "Form session opened", body = EntityResponse<EnderecoFormSerializer>),
        (status = 500, description = "Internal server error", body = ClientResponseError)
    )
)]
pub async fn controller_create_form(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<EntityResponse<EnderecoFormSerializer>>)> {
    log::info!("Opening a new address form session");

    match state.endereco_service.create_form().await {
        Ok(result) => {
            log::info!("Form session opened: {}", result.form_id);
            Ok((
                StatusCode::CREATED,
                Json(EntityResponse {
                    message: "Form session opened.".to_string(),
                    data: Some(result),
                    total: 1,
                }),
            ))
        },
        Err(err) => {
            log::error!("Failed to open form session: {err:?}");
            Err(err)
        },
    }
}

#[utoipa::path(
    get,
    path = "/v1/enderecos/forms/{form_id}",
    tags = ["endereco_service"],
    params(
        ("form_id" = Uuid, Path, description = "Form session ID")
    ),
    responses(
        (status = 200, description = "Form retrieved successfully", body = EntityResponse<EnderecoFormSerializer>),
        (status = 404, description = "Form not found", body = ClientResponseError),
        (status = 500, description = "Internal server error", body = ClientResponseError)
    )
)]
pub async fn controller_get_form(
    State(state): State<AppState>,
    Path(form_id): Path<Uuid>,
) -> AppResult<Json<EntityResponse<EnderecoFormSerializer>>> {
    log::info!("Getting form with id: {}", form_id);

    match state.endereco_service.get_form(form_id).await {
        Ok(result) => Ok(Json(EntityResponse {
            message: "Form retrieved successfully.".to_string(),
            data: Some(result),
            total: 1,
        })),
        Err(err) => {
            log::error!("Failed to get form: {err:?}");
            Err(err)
        },
    }
}

#[utoipa::path(
    patch,
    path = "/v1/enderecos/forms/{form_id}/fields",
    tags = ["endereco_service"],
    request_body = UpdateFieldRequest,
    params(
        ("form_id" = Uuid, Path, description = "Form session ID")
    ),
    responses(
        (status = 200, description = "Field updated successfully", body = EntityResponse<EnderecoFormSerializer>),
        (status = 400, description = "Bad request", body = ClientResponseError),
        (status = 404, description = "Form not found", body = ClientResponseError),
        (status = 500, description = "Internal server error", body = ClientResponseError)
    )
)]
pub async fn controller_update_field(
    State(state): State<AppState>,
    Path(form_id): Path<Uuid>,
    Json(request): Json<UpdateFieldRequest>,
) -> AppResult<Json<EntityResponse<EnderecoFormSerializer>>> {
    log::info!("Updating field {} of form {}", request.field, form_id);

    match state.endereco_service.update_field(form_id, request).await {
        Ok(result) => Ok(Json(EntityResponse {
            message: "Field updated successfully.".to_string(),
            data: Some(result),
            total: 1,
        })),
        Err(err) => {
            log::error!("Failed to update field: {err:?}");
            Err(err)
        },
    }
}

#[utoipa::path(
    put,
    path = "/v1/enderecos/forms/{form_id}/avatar",
    tags = ["endereco_service"],
    params(
        ("form_id" = Uuid, Path, description = "Form session ID")
    ),
    responses(
        (status = 200, description = "Avatar uploaded successfully", body = EntityResponse<EnderecoFormSerializer>),
        (status = 404, description = "Form not found", body = ClientResponseError),
        (status = 422, description = "Missing or invalid upload field", body = ClientResponseError),
        (status = 500, description = "Internal server error", body = ClientResponseError)
    )
)]
pub async fn controller_upload_avatar(
    State(state): State<AppState>,
    Path(form_id): Path<Uuid>,
    mut multipart: Multipart,
) -> AppResult<Json<EntityResponse<EnderecoFormSerializer>>> {
    log::info!("Uploading avatar for form {}", form_id);

    let mut uploaded: Option<AvatarFile> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::InvalidPayloadError(err.to_string()))?
    {
        if field.name() != Some("avatar") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|err| AppError::InvalidPayloadError(err.to_string()))?;

        uploaded = Some(AvatarFile {
            file_name,
            content_type,
            size_bytes: data.len() as u64,
        });
    }

    let avatar = uploaded.ok_or_else(|| {
        AppError::InvalidPayloadError("Campo de upload 'avatar' ausente".to_string())
    })?;

    match state.endereco_service.upload_avatar(form_id, avatar).await {
        Ok(result) => Ok(Json(EntityResponse {
            message: "Avatar uploaded successfully.".to_string(),
            data: Some(result),
            total: 1,
        })),
        Err(err) => {
            log::error!("Failed to upload avatar: {err:?}");
            Err(err)
        },
    }
}

#[utoipa::path(
    post,
    path = "/v1/enderecos/forms/{form_id}/submit",
    tags = ["endereco_service"],
    params(
        ("form_id" = Uuid, Path, description = "Form session ID")
    ),
    responses(
        (status = 200, description = "Form submitted successfully", body = EntityResponse<SubmitEnderecoSerializer>),
        (status = 404, description = "Form not found", body = ClientResponseError),
        (status = 422, description = "Validation failed", body = ClientResponseError),
        (status = 500, description = "Internal server error", body = ClientResponseError)
    )
)]
pub async fn controller_submit_form(
    State(state): State<AppState>,
    Path(form_id): Path<Uuid>,
) -> AppResult<Json<EntityResponse<SubmitEnderecoSerializer>>> {
    log::info!("Submitting form with id: {}", form_id);

    match state.endereco_service.submit_form(form_id).await {
        Ok(result) => Ok(Json(EntityResponse {
            message: "Form submitted successfully.".to_string(),
            data: Some(result),
            total: 1,
        })),
        Err(err) => {
            log::warn!("Unsuccessful form submission: {err:?}");
            Err(err)
        },
    }
}

#[utoipa::path(
    delete,
    path = "/v1/enderecos/forms/{form_id}",
    tags = ["endereco_service"],
    params(
        ("form_id" = Uuid, Path, description = "Form session ID")
    ),
    responses(
        (status = 200, description = "Form closed successfully", body = EntityResponse<String>),
        (status = 404, description = "Form not found", body = ClientResponseError),
        (status = 500, description = "Internal server error", body = ClientResponseError)
    )
)]
pub async fn controller_close_form(
    State(state): State<AppState>,
    Path(form_id): Path<Uuid>,
) -> AppResult<Json<EntityResponse<String>>> {
    log::info!("Closing form with id: {}", form_id);

    match state.endereco_service.close_form(form_id).await {
        Ok(_) => Ok(Json(EntityResponse {
            message: "Form closed successfully.".to_string(),
            data: Some("Form closed successfully.".to_string()),
            total: 1,
        })),
        Err(err) => {
            log::error!("Failed to close form: {err:?}");
            Err(err)
        },
    }
}
