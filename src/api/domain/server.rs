use axum::Json;
use crate::core::response::EntityResponse;

#[utoipa::path(
    get,
    path = "/v1/health",
    tags = ["server"],
    responses(
        (status = 200, description = "Service is healthy", body = EntityResponse<String>)
    )
)]
pub async fn health_check() -> Json<EntityResponse<String>> {
    Json(EntityResponse {
        message: "Service is healthy.".to_string(),
        data: Some("ok".to_string()),
        total: 1,
    })
}
