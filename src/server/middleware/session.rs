//! Session resolution middleware
//!
//! Resolves the request's session token into a [`Principal`] stored in the
//! request extensions. Resolution happens on every request, so a role
//! reassignment in the store is honored immediately. Authorization itself is
//! enforced per operation by the permission guard.

use crate::core::models::Principal;
use crate::server::middleware::helpers::extract_session_token;
use crate::server::state::AppState;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::{HttpMessage, web};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use tracing::warn;

/// Session middleware for Actix-web
pub struct SessionContext;

impl<S, B> Transform<S, ServiceRequest> for SessionContext
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = SessionContextMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionContextMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Service implementation for session middleware
pub struct SessionContextMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionContextMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            if let Some(state) = req.app_data::<web::Data<AppState>>().cloned() {
                let token =
                    extract_session_token(req.headers(), &state.config.auth.cookie_name);

                if let Some(token) = token {
                    match state.auth.resolve(&token).await {
                        Ok(Some(user)) => {
                            req.extensions_mut().insert::<Principal>(user.principal());
                        }
                        Ok(None) => {}
                        // A store outage during resolution leaves the request
                        // anonymous; the failure is logged, not leaked.
                        Err(e) => warn!("session resolution failed: {}", e),
                    }
                }
            }

            service.call(req).await
        })
    }
}
