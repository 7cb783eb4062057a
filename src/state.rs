use anyhow::Context;
use migration::{Migrator, MigratorTrait};

use crate::{config::Config, prelude::*, sv::Token};

/// Shared by every request. Owns the single connection pool.
pub struct AppState {
  pub db: DatabaseConnection,
  pub config: Config,
  pub token: Token,
}

impl AppState {
  pub async fn new(config: Config) -> anyhow::Result<Self> {
    let db = Database::connect(&config.database_url)
      .await
      .with_context(|| format!("Failed to connect to {}", config.database_url))?;

    Migrator::up(&db, None).await.context("Failed to run migrations")?;
    info!("Database ready");

    Ok(Self::with_db(db, config))
  }

  pub fn with_db(db: DatabaseConnection, config: Config) -> Self {
    let token = Token::new(&config.jwt_secret, config.token_ttl);
    Self { db, config, token }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    entity::user,
    sv::{self, test_utils::fixtures},
  };

  #[tokio::test]
  async fn test_migrated_schema_matches_entities() {
    let app = AppState::new(fixtures::config()).await.unwrap();

    let user = sv::Auth::new(&app.db, &app.config)
      .register(sv::NewUser {
        first_name: "Ann".into(),
        last_name: "Lee".into(),
        email: "ann@example.com".into(),
        mobile: "5550001".into(),
        password: "hunter22".into(),
        sponsor_id: None,
      })
      .await
      .unwrap();

    let stored = sv::User::new(&app.db).get(&user.id).await.unwrap();
    assert_eq!(stored, user);

    let clash = user::ActiveModel::from(fixtures::user(
      "u-2",
      "bob@example.com",
      "5550002",
      &user.sponsor_id,
    ))
    .insert(&app.db)
    .await
    .map_err(Error::from);
    assert!(matches!(clash, Err(Error::Conflict(_))));

    let overview = sv::Dashboard::new(&app.db).overview(&user.id).await.unwrap();
    assert_eq!(overview.total_earnings, 0.0);
  }
}
