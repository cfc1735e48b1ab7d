use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;
use crate::api;
use crate::core::app_state::AppState;
use crate::core::configure::AppConfig;
use crate::core::error::AppResult;

pub struct AppServer {
    pub state: AppState,
    router: Router,
}

impl AppServer {
    pub async fn new(config: AppConfig) -> AppResult<Self> {
        let state = AppState::new(config).await?;

        let (router, api_doc) = OpenApiRouter::with_openapi(api::ApiDoc::openapi())
            .merge(api::build_routes())
            .split_for_parts();

        let router = router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api_doc))
            .layer(
                ServiceBuilder::new()
                    .layer(CorsLayer::permissive())
                    .layer(CompressionLayer::new()),
            )
            .with_state(state.clone());

        Ok(Self { state, router })
    }

    pub async fn run(self) -> AppResult<()> {
        let addr = self.state.config.server.get_socket_addr();
        let listener = TcpListener::bind(&addr).await?;
        log::info!("Listening on {addr}");

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
