//! Health endpoint tests
//!
//! PocketBase is pointed at a closed port, so the backend always shows up
//! as unreachable.

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use std::sync::Arc;
use std::time::Duration;

use stickerboard::api::middleware::PocketBaseHook;
use stickerboard::api::services::health::HealthResponse;
use stickerboard::api::services::{ApiResponse, AppStartTime, ErrorCode, configure_routes};
use stickerboard::services::{ImageCatalog, StaticImageCatalog, StickerService};

const UNREACHABLE_POCKETBASE: &str = "http://127.0.0.1:9";

macro_rules! board_app {
    () => {{
        let catalog: Arc<dyn ImageCatalog> = Arc::new(StaticImageCatalog::default());
        test::init_service(
            App::new()
                .wrap(PocketBaseHook::new(
                    UNREACHABLE_POCKETBASE,
                    Duration::from_millis(500),
                ))
                .app_data(web::Data::new(catalog))
                .app_data(web::Data::new(StickerService::new()))
                .app_data(web::Data::new(AppStartTime::now()))
                .configure(configure_routes),
        )
        .await
    }};
}

#[actix_rt::test]
async fn test_liveness_is_no_content() {
    let app = board_app!();

    let resp = test::call_service(&app, TestRequest::get().uri("/health/live").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[actix_rt::test]
async fn test_health_reports_degraded_backend() {
    let app = board_app!();

    let resp = test::call_service(&app, TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: ApiResponse<HealthResponse> = test::read_body_json(resp).await;
    assert_eq!(body.code, ErrorCode::Success as i32);
    let data = body.data.expect("health data");
    assert_eq!(data.status, "degraded");
    assert_eq!(data.catalog, "static");
    assert_eq!(data.backend.status, "unhealthy");
    assert_eq!(data.backend.url, UNREACHABLE_POCKETBASE);
    assert!(data.backend.error.is_some());
}

#[actix_rt::test]
async fn test_readiness_fails_without_backend() {
    let app = board_app!();

    let resp = test::call_service(&app, TestRequest::get().uri("/health/ready").to_request()).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: ApiResponse<serde_json::Value> = test::read_body_json(resp).await;
    assert_eq!(body.code, ErrorCode::ServiceUnavailable as i32);
}
