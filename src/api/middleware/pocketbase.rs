//! Request hook: attach a PocketBase client to every request
//!
//! Each request gets its own `PocketBase` value in the request extensions;
//! handlers extract it as an argument. Instances share only the HTTP agent.

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;
use tracing::trace;
use ureq::Agent;

use crate::pocketbase::{PocketBase, build_agent};

/// Middleware factory holding the client settings
#[derive(Clone)]
pub struct PocketBaseHook {
    base_url: Arc<str>,
    agent: Agent,
}

impl PocketBaseHook {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: Arc::from(base_url),
            agent: build_agent(timeout),
        }
    }

    pub fn from_config(config: &crate::config::PocketBaseConfig) -> Self {
        Self::new(&config.url, Duration::from_secs(config.timeout))
    }

    /// A client sharing this hook's agent and timeout
    pub fn client(&self) -> PocketBase {
        PocketBase::with_agent(&self.base_url, self.agent.clone())
    }
}

impl<S, B> Transform<S, ServiceRequest> for PocketBaseHook
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = PocketBaseHookService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(PocketBaseHookService {
            service: Rc::new(service),
            base_url: self.base_url.clone(),
            agent: self.agent.clone(),
        }))
    }
}

pub struct PocketBaseHookService<S> {
    service: Rc<S>,
    base_url: Arc<str>,
    agent: Agent,
}

impl<S, B> Service<ServiceRequest> for PocketBaseHookService<S>
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

        trace!("Attaching PocketBase client for {}", self.base_url);
        req.extensions_mut()
            .insert(PocketBase::with_agent(&self.base_url, self.agent.clone()));

        Box::pin(async move { srv.call(req).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PocketBaseConfig;
    use crate::errors::StickerboardError;

    #[test]
    fn test_client_uses_configured_url() {
        let config = PocketBaseConfig {
            url: "http://pb.internal:8090/".to_string(),
            timeout: 7,
        };
        let client = PocketBaseHook::from_config(&config).client();
        assert_eq!(client.base_url(), "http://pb.internal:8090");
    }

    #[tokio::test]
    async fn test_client_probe_fails_against_closed_port() {
        let hook = PocketBaseHook::new("http://127.0.0.1:9", Duration::from_millis(200));
        match hook.client().health().await {
            Err(StickerboardError::Backend(_)) => {}
            other => panic!("expected backend error, got {:?}", other),
        }
    }
}
