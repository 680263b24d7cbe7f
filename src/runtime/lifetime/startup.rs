use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::api::middleware::PocketBaseHook;
use crate::api::services::AppStartTime;
use crate::config::StaticConfig;
use crate::services::{ImageCatalog, StaticImageCatalog, StickerService};

/// Shared state handed to every worker
pub struct StartupContext {
    pub catalog: Arc<dyn ImageCatalog>,
    pub sticker_service: StickerService,
    pub pocketbase_hook: PocketBaseHook,
    pub app_start_time: AppStartTime,
}

/// 准备服务器启动的上下文
///
/// PocketBase is probed once; an unreachable backend is logged, not fatal.
pub async fn prepare_server_startup(config: &StaticConfig) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let catalog: Arc<dyn ImageCatalog> = Arc::new(StaticImageCatalog::default());
    info!("Using image catalog: {}", catalog.name());

    let pocketbase_hook = PocketBaseHook::from_config(&config.pocketbase);
    match pocketbase_hook.client().health().await {
        Ok(status) => info!(
            "PocketBase reachable at {}: {}",
            config.pocketbase.url, status.message
        ),
        Err(e) => warn!(
            "PocketBase at {} is not reachable yet: {}",
            config.pocketbase.url, e
        ),
    }

    debug!("Pre-startup finished in {:?}", start_time.elapsed());

    Ok(StartupContext {
        catalog,
        sticker_service: StickerService::new(),
        pocketbase_hook,
        app_start_time: AppStartTime::now(),
    })
}
