//! Bearer credentials: HS256 JWTs carrying user id, email and admin flag.

use axum::http::{HeaderMap, header::AUTHORIZATION};
use jsonwebtoken::{
  Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
};
use serde::{Deserialize, Serialize};

use crate::{entity::user, prelude::*};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
  /// User id
  pub sub: String,
  pub email: String,
  pub is_admin: bool,
  pub iat: i64,
  pub exp: i64,
}

pub struct Token {
  encoding: EncodingKey,
  decoding: DecodingKey,
  validation: Validation,
  ttl: TimeDelta,
}

impl Token {
  pub fn new(secret: &str, ttl: TimeDelta) -> Self {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    Self {
      encoding: EncodingKey::from_secret(secret.as_bytes()),
      decoding: DecodingKey::from_secret(secret.as_bytes()),
      validation,
      ttl,
    }
  }

  pub fn issue(&self, user: &user::Model) -> Result<String> {
    let now = Utc::now();
    self.sign(&Claims {
      sub: user.id.clone(),
      email: user.email.clone(),
      is_admin: user.is_admin,
      iat: now.timestamp(),
      exp: (now + self.ttl).timestamp(),
    })
  }

  pub fn sign(&self, claims: &Claims) -> Result<String> {
    encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
      .map_err(|err| Error::Internal(format!("failed to sign token: {err}")))
  }

  pub fn decode(&self, token: &str) -> Result<Claims> {
    decode::<Claims>(token, &self.decoding, &self.validation)
      .map(|data| data.claims)
      .map_err(|err| {
        debug!("token rejected: {err}");
        Error::InvalidToken
      })
  }

  pub fn verify(&self, headers: &HeaderMap) -> Result<Claims> {
    self.decode(bearer(headers)?)
  }

  pub fn verify_admin(&self, headers: &HeaderMap) -> Result<Claims> {
    let claims = self.verify(headers)?;
    if !claims.is_admin {
      return Err(Error::Forbidden);
    }
    Ok(claims)
  }
}

/// Extracts `<token>` from `Authorization: Bearer <token>`.
pub fn bearer(headers: &HeaderMap) -> Result<&str> {
  headers
    .get(AUTHORIZATION)
    .and_then(|value| value.to_str().ok())
    .and_then(|value| value.strip_prefix("Bearer "))
    .map(str::trim)
    .filter(|token| !token.is_empty())
    .ok_or(Error::Unauthenticated)
}
