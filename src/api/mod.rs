use axum::http::{StatusCode, Uri};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use crate::core::app_state::AppState;
pub mod domain;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cadastro Especialista - Endereço Service",
        description = "Address step of the specialist sign-up flow: validated form sessions with CEP auto-fill"
    ),
    tags(
        (name = "endereco_service", description = "Address form sessions"),
        (name = "server", description = "Service health")
    )
)]
pub struct ApiDoc;

pub fn build_routes() -> OpenApiRouter<AppState> {
    let server_routes = OpenApiRouter::new().routes(routes!(domain::server::health_check));

    let endereco_routes = OpenApiRouter::new()
        .routes(routes!(domain::endereco::endereco::controller_create_form))
        .routes(routes!(domain::endereco::endereco::controller_get_form))
        .routes(routes!(domain::endereco::endereco::controller_update_field))
        .routes(routes!(domain::endereco::endereco::controller_upload_avatar))
        .routes(routes!(domain::endereco::endereco::controller_submit_form))
        .routes(routes!(domain::endereco::endereco::controller_close_form));

    OpenApiRouter::new()
        .merge(endereco_routes)
        .merge(server_routes)
        .fallback(handler_404)
}

pub async fn handler_404(uri: Uri) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, format!("No route for {uri}"))
}
