//! Remote commands
//!
//! JSON-in, JSON-out endpoints called by the canvas client. The response body
//! is the command's output as-is; only failures use the error envelope.

use actix_web::{HttpResponse, Responder, web};
use tracing::warn;

use super::response::{error_from_stickerboard, json_payload_error};
use crate::services::{StickerService, UploadStickerInput};

pub const REMOTE_PREFIX: &str = "/_app/remote";

/// 命令请求体上限
pub const MAX_COMMAND_BODY_BYTES: usize = 64 * 1024;

pub struct RemoteService;

impl RemoteService {
    pub async fn upload_sticker(
        service: web::Data<StickerService>,
        payload: web::Json<UploadStickerInput>,
    ) -> impl Responder {
        match service.upload_sticker(payload.into_inner()).await {
            Ok(output) => HttpResponse::Ok().json(output),
            Err(e) => {
                warn!("upload_sticker rejected: {}", e);
                error_from_stickerboard(&e)
            }
        }
    }
}

/// Remote command routes, mounted under [`REMOTE_PREFIX`]
pub fn remote_routes() -> actix_web::Scope {
    web::scope(REMOTE_PREFIX)
        .app_data(
            web::JsonConfig::default()
                .limit(MAX_COMMAND_BODY_BYTES)
                .error_handler(json_payload_error),
        )
        .route(
            "/stickers/upload_sticker",
            web::post().to(RemoteService::upload_sticker),
        )
}
