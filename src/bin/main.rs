use cadastro_backend::core::error::AppResult;
use cadastro_backend::core::server::AppServer;
use cadastro_backend::util::constant::CONFIG;
use log::{error, info, LevelFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    env_logger::builder().filter_level(LevelFilter::Info).format_target(true).init();

    let config = CONFIG.clone();
    let server = AppServer::new(config).await?;
    info!("Starting server...");

    let server_task = tokio::spawn(async {
        if let Err(e) = server.run().await {
            error!("HTTP Server error: {:?}", e);
        }
    });

    let _server_result = tokio::join!(server_task);

    Ok(())
}
