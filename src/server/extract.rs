use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{prelude::*, state::AppState, sv::Claims};

/// Any caller with a valid bearer token.
#[derive(Debug)]
pub struct AuthUser(pub Claims);

/// Valid bearer token carrying the admin flag.
#[derive(Debug)]
pub struct AdminUser(pub Claims);

impl FromRequestParts<Arc<AppState>> for AuthUser {
  type Rejection = Error;

  async fn from_request_parts(
    parts: &mut Parts,
    app: &Arc<AppState>,
  ) -> Result<Self> {
    app.token.verify(&parts.headers).map(AuthUser)
  }
}

impl FromRequestParts<Arc<AppState>> for AdminUser {
  type Rejection = Error;

  async fn from_request_parts(
    parts: &mut Parts,
    app: &Arc<AppState>,
  ) -> Result<Self> {
    app.token.verify_admin(&parts.headers).map(AdminUser)
  }
}
