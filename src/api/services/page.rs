//! Page load
//!
//! `GET /` returns the data the canvas page starts from. `/__data.json` is
//! the same payload under the path the client router fetches on navigation.

use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error};

use super::response::error_from_stickerboard;
use crate::image::StoredImage;
use crate::services::ImageCatalog;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub initial_images: Vec<StoredImage>,
}

pub struct PageService;

impl PageService {
    pub async fn load(catalog: web::Data<Arc<dyn ImageCatalog>>) -> impl Responder {
        match catalog.initial_images().await {
            Ok(initial_images) => {
                debug!(
                    "Page load: {} images from {} catalog",
                    initial_images.len(),
                    catalog.name()
                );
                HttpResponse::Ok().json(PageData { initial_images })
            }
            Err(e) => {
                error!("Page load failed: {}", e);
                error_from_stickerboard(&e)
            }
        }
    }
}

/// Page routes. The server wraps them in
/// [`CrossOriginIsolation`](crate::api::middleware::CrossOriginIsolation).
///
/// Registered with an empty prefix, so it must come after every other scope.
pub fn page_routes() -> actix_web::Scope {
    web::scope("")
        .route("/", web::get().to(PageService::load))
        .route("/", web::head().to(PageService::load))
        .route("/__data.json", web::get().to(PageService::load))
        .route("/__data.json", web::head().to(PageService::load))
}
