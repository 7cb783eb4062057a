//! Shared test utilities for database setup

#[cfg(test)]
pub mod test_db {
  use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, DbBackend, Schema,
  };

  use crate::entity::*;

  /// Creates an in-memory SQLite database with all required tables
  pub async fn setup() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    let schema = Schema::new(DbBackend::Sqlite);

    let stmt = schema.create_table_from_entity(user::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    let stmt = schema.create_table_from_entity(transaction::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    db
  }

  /// Connection without any tables: any data access fails.
  pub async fn empty() -> DatabaseConnection {
    Database::connect("sqlite::memory:").await.unwrap()
  }
}

#[cfg(test)]
pub mod fixtures {
  use crate::{
    config::Config,
    entity::{KycStatus, TransactionType, transaction, user},
    prelude::*,
  };

  pub fn config() -> Config {
    Config {
      database_url: "sqlite::memory:".into(),
      jwt_secret: "test-secret".into(),
      port: 0,
      token_ttl: TimeDelta::hours(24),
      bcrypt_cost: 4,
      sponsor_id_attempts: 10,
    }
  }

  pub fn user(id: &str, email: &str, mobile: &str, sponsor_id: &str) -> user::Model {
    let now = Utc::now().naive_utc();
    user::Model {
      id: id.into(),
      first_name: "Ann".into(),
      last_name: "Lee".into(),
      email: email.into(),
      mobile: mobile.into(),
      password: "$2b$04$not.a.real.hash".into(),
      sponsor_id: sponsor_id.into(),
      parent_sponsor_id: None,
      referral_count: 0,
      balance: 0.0,
      total_investment: 0.0,
      total_withdrawn: 0.0,
      kyc_status: KycStatus::Pending,
      is_admin: false,
      created_at: now,
      updated_at: now,
    }
  }

  pub async fn insert(db: &DatabaseConnection, model: user::Model) -> user::Model {
    user::ActiveModel::from(model).insert(db).await.unwrap()
  }

  pub async fn insert_user(
    db: &DatabaseConnection,
    id: &str,
    email: &str,
    mobile: &str,
    sponsor_id: &str,
  ) -> user::Model {
    insert(db, user(id, email, mobile, sponsor_id)).await
  }

  pub async fn insert_tx(
    db: &DatabaseConnection,
    user_id: &str,
    tx_type: TransactionType,
    amount: f64,
    created_at: DateTime,
  ) -> transaction::Model {
    transaction::ActiveModel {
      id: sea_orm::NotSet,
      user_id: Set(user_id.into()),
      tx_type: Set(tx_type),
      amount: Set(amount),
      description: Set(None),
      created_at: Set(created_at),
    }
    .insert(db)
    .await
    .unwrap()
  }

  /// `minutes` after a fixed base instant.
  pub fn at(minutes: i64) -> DateTime {
    chrono::NaiveDate::from_ymd_opt(2026, 1, 1)
      .unwrap()
      .and_hms_opt(0, 0, 0)
      .unwrap()
      + TimeDelta::minutes(minutes)
  }
}
