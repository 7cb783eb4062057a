use std::env;

use anyhow::{Context, bail};

use crate::prelude::*;

#[derive(Debug, Clone)]
pub struct Config {
  pub database_url: String,
  pub jwt_secret: String,
  pub port: u16,
  pub token_ttl: TimeDelta,
  pub bcrypt_cost: u32,
  /// Upper bound on random draws when generating a sponsor id.
  pub sponsor_id_attempts: u32,
}

impl Config {
  pub fn from_env() -> anyhow::Result<Self> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
    let jwt_secret = get("JWT_SECRET").unwrap_or_default();
    if jwt_secret.trim().is_empty() {
      bail!("JWT_SECRET not set");
    }

    let token_ttl_hours: i64 = parse_or(&get, "TOKEN_TTL_HOURS", 24)?;
    if token_ttl_hours <= 0 {
      bail!("TOKEN_TTL_HOURS must be positive");
    }

    let bcrypt_cost: u32 = parse_or(&get, "BCRYPT_COST", 10)?;
    if !(4..=31).contains(&bcrypt_cost) {
      bail!("BCRYPT_COST must be between 4 and 31, got {bcrypt_cost}");
    }

    Ok(Self {
      database_url: get("DATABASE_URL")
        .unwrap_or_else(|| "sqlite:fxdesk.db?mode=rwc".into()),
      jwt_secret,
      port: parse_or(&get, "PORT", 3000)?,
      token_ttl: TimeDelta::hours(token_ttl_hours),
      bcrypt_cost,
      sponsor_id_attempts: parse_or(&get, "SPONSOR_ID_ATTEMPTS", 10u32)?
        .max(1),
    })
  }
}

fn parse_or<T>(
  get: &impl Fn(&str) -> Option<String>,
  key: &str,
  default: T,
) -> anyhow::Result<T>
where
  T: std::str::FromStr,
  T::Err: std::error::Error + Send + Sync + 'static,
{
  match get(key) {
    Some(raw) => raw.trim().parse().with_context(|| format!("Invalid {key}")),
    None => Ok(default),
  }
}
