use axum::{
  Json,
  extract::rejection::{JsonRejection, QueryRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("{0}")]
  Validation(String),
  #[error("{0}")]
  Conflict(String),
  #[error("Authorization header missing or malformed")]
  Unauthenticated,
  #[error("Invalid or expired token")]
  InvalidToken,
  #[error("Invalid email or password")]
  InvalidCredentials,
  #[error("Admin access required")]
  Forbidden,
  #[error("{0} not found")]
  NotFound(&'static str),
  #[error("Method not allowed")]
  MethodNotAllowed,
  #[error("internal: {0}")]
  Internal(String),
  #[error("database: {0}")]
  Db(DbErr),
}

impl Error {
  pub fn status(&self) -> StatusCode {
    match self {
      Error::Validation(_) | Error::Conflict(_) => StatusCode::BAD_REQUEST,
      // Admin rejections share 401 with the other auth failures.
      Error::Unauthenticated
      | Error::InvalidToken
      | Error::InvalidCredentials
      | Error::Forbidden => StatusCode::UNAUTHORIZED,
      Error::NotFound(_) => StatusCode::NOT_FOUND,
      Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
      Error::Internal(_) | Error::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl From<DbErr> for Error {
  fn from(err: DbErr) -> Self {
    match err.sql_err() {
      Some(SqlErr::UniqueConstraintViolation(detail)) => {
        tracing::debug!("unique constraint violated: {detail}");
        Error::Conflict("User already exists".into())
      }
      _ => Error::Db(err),
    }
  }
}

impl From<JsonRejection> for Error {
  fn from(rejection: JsonRejection) -> Self {
    Error::Validation(rejection.body_text())
  }
}

impl From<QueryRejection> for Error {
  fn from(rejection: QueryRejection) -> Self {
    Error::Validation(rejection.body_text())
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let status = self.status();
    let message = match &self {
      Error::Internal(_) | Error::Db(_) => {
        tracing::error!("request failed: {self}");
        "Internal server error".to_string()
      }
      other => other.to_string(),
    };

    (status, Json(json::json!({ "error": message }))).into_response()
  }
}
