//! Per-operation permission guard
//!
//! Every protected handler declares the single permission it requires by
//! taking a [`Require<P>`] argument. The guard runs before the handler body:
//! it reads the principal resolved by the session middleware and asks the
//! RBAC engine for a decision. Anonymous callers are redirected to the login
//! entry point; authenticated callers without the permission get a forbidden
//! response the handler never sees.

use crate::auth::{Access, Permission};
use crate::core::models::Principal;
use crate::server::state::AppState;
use crate::utils::error::VaultError;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest, web};
use futures::future::{Ready, ready};
use std::marker::PhantomData;

/// A permission marker type usable with [`Require`]
pub trait RequiredPermission: 'static {
    /// The permission this marker stands for
    const PERMISSION: Permission;
}

/// Permission marker types, one per enumeration value
pub mod perm {
    /// Grants read access to records
    pub struct View;
    /// Grants record creation
    pub struct Create;
    /// Grants record modification
    pub struct Edit;
    /// Grants record deletion
    pub struct Delete;
    /// Grants user administration
    pub struct ManageUsers;
}

impl RequiredPermission for perm::View {
    const PERMISSION: Permission = Permission::View;
}

impl RequiredPermission for perm::Create {
    const PERMISSION: Permission = Permission::Create;
}

impl RequiredPermission for perm::Edit {
    const PERMISSION: Permission = Permission::Edit;
}

impl RequiredPermission for perm::Delete {
    const PERMISSION: Permission = Permission::Delete;
}

impl RequiredPermission for perm::ManageUsers {
    const PERMISSION: Permission = Permission::ManageUsers;
}

/// Extractor that admits the request only when the current principal holds
/// permission `P`
pub struct Require<P: RequiredPermission> {
    /// The authorized principal
    pub principal: Principal,
    _permission: PhantomData<P>,
}

impl<P: RequiredPermission> FromRequest for Require<P> {
    type Error = VaultError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let principal = req.extensions().get::<Principal>().cloned();

        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            return ready(Err(VaultError::Internal(
                "application state not configured".into(),
            )));
        };

        let decision = state.auth.rbac().decide(principal.as_ref(), P::PERMISSION);

        ready(match (decision, principal) {
            (Access::Granted, Some(principal)) => Ok(Require {
                principal,
                _permission: PhantomData,
            }),
            (Access::Granted, None) => Err(VaultError::Internal(
                "access granted without a principal".into(),
            )),
            (Access::Unauthenticated, _) => Err(VaultError::Unauthenticated),
            (Access::Forbidden, _) => Err(VaultError::Unauthorized),
        })
    }
}

/// Extractor that only requires an authenticated principal, with no
/// permission check
pub struct Authenticated {
    /// The authenticated principal
    pub principal: Principal,
}

impl FromRequest for Authenticated {
    type Error = VaultError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<Principal>()
                .cloned()
                .map(|principal| Authenticated { principal })
                .ok_or(VaultError::Unauthenticated),
        )
    }
}
