//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use canteen_app::auth::Principal;

const PRINCIPAL_KEY: &str = "canteen::principal";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Stores the authenticated principal for downstream handlers.
    fn insert_principal(&mut self, principal: Principal);

    /// The authenticated principal, or 401 when the auth middleware did not
    /// run.
    fn principal_or_401(&self) -> Result<Principal, StatusError>;

    /// The authenticated principal when it carries the admin role, or 403.
    fn admin_or_403(&self) -> Result<Principal, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_principal(&mut self, principal: Principal) {
        self.insert(PRINCIPAL_KEY, principal);
    }

    fn principal_or_401(&self) -> Result<Principal, StatusError> {
        self.get::<Principal>(PRINCIPAL_KEY)
            .ok()
            .copied()
            .ok_or_else(StatusError::unauthorized)
    }

    fn admin_or_403(&self) -> Result<Principal, StatusError> {
        let principal = self.principal_or_401()?;

        if !principal.is_admin() {
            return Err(StatusError::forbidden().brief("Admin role required"));
        }

        Ok(principal)
    }
}
