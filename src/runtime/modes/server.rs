//! Server mode
//!
//! This module contains the HTTP server startup logic.
//! It configures and starts the HTTP server with all necessary routes.

use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders},
    web,
};
use anyhow::{Context, Result};
use tracing::warn;

use crate::api::middleware::RequestIdMiddleware;
use crate::api::services::configure_routes;
use crate::config::StaticConfig;
use crate::runtime::lifetime;

/// Run the HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(config: &StaticConfig) -> Result<()> {
    let startup = lifetime::startup::prepare_server_startup(config)
        .await
        .map_err(|e| {
            tracing::error!("Server startup failed: {}", e);
            e
        })?;

    let catalog = startup.catalog.clone();
    let sticker_service = web::Data::new(startup.sticker_service.clone());
    let pocketbase_hook = startup.pocketbase_hook.clone();
    let app_start_time = startup.app_start_time.clone();

    let cpu_count = config.server.cpu_count.clamp(1, 32);
    warn!("Using {} CPU cores for the server", cpu_count);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(pocketbase_hook.clone())
            .wrap(Compress::default())
            .wrap(DefaultHeaders::new().add(("Cache-Control", "no-cache, no-store, must-revalidate")))
            .wrap(RequestIdMiddleware) // 最外层，为每个请求生成 request_id
            .app_data(web::Data::new(catalog.clone()))
            .app_data(sticker_service.clone())
            .app_data(web::Data::new(app_start_time.clone()))
            .configure(configure_routes)
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .client_request_timeout(std::time::Duration::from_millis(5000))
    .client_disconnect_timeout(std::time::Duration::from_millis(1000))
    .disable_signals()
    .workers(cpu_count)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?;

    warn!("Starting server at http://{}", bind_address);
    let server = server.run();

    let handle = server.handle();
    actix_web::rt::spawn(async move {
        lifetime::shutdown::listen_for_shutdown().await;
        lifetime::shutdown::graceful_stop(handle).await;
    });

    server.await.context("HTTP server terminated with an error")?;
    warn!("Graceful shutdown: server stopped");
    Ok(())
}
