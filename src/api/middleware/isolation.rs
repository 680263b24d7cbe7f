//! Cross-origin isolation headers
//!
//! Wraps every page route (the layout load). Headers are set unconditionally
//! on whatever response the page handlers produce, including error pages.

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    dev::{ServiceRequest, ServiceResponse},
    http::header::{HeaderName, HeaderValue},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;

pub const CROSS_ORIGIN_OPENER_POLICY: &str = "cross-origin-opener-policy";
pub const CROSS_ORIGIN_EMBEDDER_POLICY: &str = "cross-origin-embedder-policy";

/// Header pairs applied to every layout response
pub const ISOLATION_HEADERS: [(&str, &str); 2] = [
    (CROSS_ORIGIN_OPENER_POLICY, "same-origin"),
    (CROSS_ORIGIN_EMBEDDER_POLICY, "require-corp"),
];

#[derive(Clone, Default)]
pub struct CrossOriginIsolation;

impl<S, B> Transform<S, ServiceRequest> for CrossOriginIsolation
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = CrossOriginIsolationService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CrossOriginIsolationService {
            service: Rc::new(service),
        }))
    }
}

pub struct CrossOriginIsolationService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for CrossOriginIsolationService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();

        Box::pin(async move {
            let mut response = srv.call(req).await?;
            let headers = response.headers_mut();
            for (name, value) in ISOLATION_HEADERS {
                headers.insert(
                    HeaderName::from_static(name),
                    HeaderValue::from_static(value),
                );
            }
            Ok(response)
        })
    }
}
