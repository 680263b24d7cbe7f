use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, trace};

use super::response::{ErrorCode, json_response};
use crate::pocketbase::PocketBase;
use crate::services::ImageCatalog;

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

impl AppStartTime {
    pub fn now() -> Self {
        Self {
            start_datetime: chrono::Utc::now(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthBackendCheck {
    pub status: String,
    pub url: String,
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime: u32,
    pub catalog: String,
    pub backend: HealthBackendCheck,
    pub response_time_ms: u32,
}

/// Health Service
///
/// The board serves its seed images without PocketBase, so an unreachable
/// backend is reported as `degraded`, not as a failure of `/health`.
pub struct HealthService;

impl HealthService {
    async fn check_backend(pb: &PocketBase) -> HealthBackendCheck {
        match pb.health().await {
            Ok(status) => {
                trace!("PocketBase healthy: {}", status.message);
                HealthBackendCheck {
                    status: "healthy".to_string(),
                    url: pb.base_url().to_string(),
                    error: None,
                }
            }
            Err(e) => {
                error!("PocketBase health check failed: {}", e);
                HealthBackendCheck {
                    status: "unhealthy".to_string(),
                    url: pb.base_url().to_string(),
                    error: Some(e.message().to_string()),
                }
            }
        }
    }

    pub async fn health_check(
        pb: PocketBase,
        catalog: web::Data<Arc<dyn ImageCatalog>>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        let start_time = Instant::now();
        trace!("Received health check request");

        let backend = Self::check_backend(&pb).await;
        let now = chrono::Utc::now();
        let uptime_seconds = (now - app_start_time.start_datetime).num_seconds().max(0) as u32;
        let status = if backend.status == "healthy" {
            "healthy"
        } else {
            "degraded"
        };

        info!(
            "Health check completed in {:?}, status: {}, uptime: {}s",
            start_time.elapsed(),
            status,
            uptime_seconds
        );

        json_response(
            StatusCode::OK,
            ErrorCode::Success,
            "OK",
            Some(HealthResponse {
                status: status.to_string(),
                timestamp: now.to_rfc3339(),
                uptime: uptime_seconds,
                catalog: catalog.name().to_string(),
                backend,
                response_time_ms: start_time.elapsed().as_millis() as u32,
            }),
        )
    }

    // 就绪检查：PocketBase 可达才算就绪
    pub async fn readiness_check(pb: PocketBase) -> impl Responder {
        trace!("Received readiness check request");

        let backend = Self::check_backend(&pb).await;
        if backend.status == "healthy" {
            HttpResponse::Ok()
                .append_header(("Content-Type", "text/plain"))
                .body("OK")
        } else {
            json_response(
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorCode::ServiceUnavailable,
                "Service Unavailable",
                Some(backend),
            )
        }
    }

    // 活跃性检查
    pub async fn liveness_check() -> impl Responder {
        trace!("Received liveness check request");

        HttpResponse::NoContent().finish()
    }
}

pub const HEALTH_PREFIX: &str = "/health";

/// Health 路由配置
pub fn health_routes() -> actix_web::Scope {
    web::scope(HEALTH_PREFIX)
        .route("", web::get().to(HealthService::health_check))
        .route("", web::head().to(HealthService::health_check))
        .route("/ready", web::get().to(HealthService::readiness_check))
        .route("/ready", web::head().to(HealthService::readiness_check))
        .route("/live", web::get().to(HealthService::liveness_check))
        .route("/live", web::head().to(HealthService::liveness_check))
}
