pub mod health;
pub mod page;
pub mod remote;
pub mod response;

pub use health::{AppStartTime, HealthService, health_routes};
pub use page::{PageData, PageService, page_routes};
pub use remote::{MAX_COMMAND_BODY_BYTES, RemoteService, remote_routes};
pub use response::{ApiResponse, ErrorCode};

use actix_web::web;

use crate::api::middleware::CrossOriginIsolation;

/// Register every route. Page routes go last: their scope has an empty prefix.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_routes())
        .service(remote_routes())
        .service(page_routes().wrap(CrossOriginIsolation));
}
