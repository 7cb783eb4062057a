use axum::{
  Json,
  body::Bytes,
  extract::{
    Query, State,
    rejection::{JsonRejection, QueryRejection},
  },
  http::StatusCode,
};

use super::{
  extract::{AdminUser, AuthUser},
  schema::*,
};
use crate::{prelude::*, state::AppState, sv};

type App = State<Arc<AppState>>;

pub async fn register(
  State(app): App,
  payload: Result<Json<RegisterReq>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResp>)> {
  let Json(req) = payload?;

  let user = sv::Auth::new(&app.db, &app.config).register(req.into()).await?;
  let token = app.token.issue(&user)?;

  Ok((StatusCode::CREATED, Json(AuthResp { token, user: user.into() })))
}

pub async fn login(
  State(app): App,
  payload: Result<Json<LoginReq>, JsonRejection>,
) -> Result<Json<AuthResp>> {
  let Json(req) = payload?;

  let user =
    sv::Auth::new(&app.db, &app.config).login(&req.email, &req.password).await?;
  let token = app.token.issue(&user)?;

  Ok(Json(AuthResp { token, user: user.into() }))
}

pub async fn profile(
  State(app): App,
  AuthUser(claims): AuthUser,
) -> Result<Json<UserResp>> {
  let user = sv::User::new(&app.db).get(&claims.sub).await?;
  Ok(Json(UserResp { user: user.into() }))
}

pub async fn update_profile(
  State(app): App,
  AuthUser(claims): AuthUser,
  body: Bytes,
) -> Result<Json<MessageResp>> {
  // A missing body is an update with no fields.
  let req: ProfileUpdateReq = if body.iter().all(u8::is_ascii_whitespace) {
    ProfileUpdateReq::default()
  } else {
    json::from_slice(&body)
      .map_err(|err| Error::Validation(format!("Invalid JSON body: {err}")))?
  };

  sv::User::new(&app.db).update_profile(&claims.sub, req.into()).await?;

  Ok(Json(MessageResp { message: "Profile updated successfully" }))
}

pub async fn dashboard(
  State(app): App,
  AuthUser(claims): AuthUser,
) -> Result<Json<DashboardResp>> {
  let overview = sv::Dashboard::new(&app.db).overview(&claims.sub).await?;
  Ok(Json(DashboardResp { data: overview.into() }))
}

pub async fn transactions(
  State(app): App,
  AuthUser(claims): AuthUser,
  query: Result<Query<TransactionsQuery>, QueryRejection>,
) -> Result<Json<TransactionsResp>> {
  let Query(query) = query?;

  let filter = sv::TypeFilter::parse(query.kind.as_deref());
  let transactions = sv::Ledger::new(&app.db)
    .list(&claims.sub, filter)
    .await?
    .into_iter()
    .map(Into::into)
    .collect();

  Ok(Json(TransactionsResp { transactions }))
}

pub async fn packages() -> Json<PackagesResp> {
  Json(PackagesResp { packages: sv::package::all() })
}

pub async fn admin_users(
  State(app): App,
  AdminUser(claims): AdminUser,
) -> Result<Json<UsersResp>> {
  debug!("admin {} listing users", claims.sub);

  let users = sv::User::new(&app.db)
    .all_newest_first()
    .await?
    .into_iter()
    .map(Into::into)
    .collect();

  Ok(Json(UsersResp { users }))
}

/// Bare `OPTIONS`; real preflights are answered by the CORS layer.
pub async fn preflight() -> StatusCode {
  StatusCode::OK
}

pub async fn method_not_allowed() -> Error {
  Error::MethodNotAllowed
}

pub async fn not_found() -> Error {
  Error::NotFound("Route")
}
