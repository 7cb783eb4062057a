use sea_orm::sea_query::Expr;
use uuid::Uuid;

use crate::{
  config::Config,
  entity::{KycStatus, user},
  prelude::*,
  sv::{self, password, sponsor},
};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Default, Clone)]
pub struct NewUser {
  pub first_name: String,
  pub last_name: String,
  pub email: String,
  pub mobile: String,
  pub password: String,
  pub sponsor_id: Option<String>,
}

pub struct Auth<'a> {
  db: &'a DatabaseConnection,
  config: &'a Config,
}

impl<'a> Auth<'a> {
  pub fn new(db: &'a DatabaseConnection, config: &'a Config) -> Self {
    Self { db, config }
  }

  pub async fn register(&self, new: NewUser) -> Result<user::Model> {
    let new = normalize(new)?;
    let users = sv::User::new(self.db);

    if users.by_email(&new.email).await?.is_some() {
      return Err(Error::Conflict("Email already registered".into()));
    }
    if users.by_mobile(&new.mobile).await?.is_some() {
      return Err(Error::Conflict("Mobile number already registered".into()));
    }

    let sponsors = sv::Sponsor::new(self.db);
    let parent = match &new.sponsor_id {
      Some(code) if sponsor::is_well_formed(code) => {
        Some(sponsors.resolve(code).await?)
      }
      Some(_) => return Err(Error::Validation("Invalid sponsor ID".into())),
      None => None,
    };

    let hashed = password::hash(new.password, self.config.bcrypt_cost).await?;
    let sponsor_id =
      sponsors.generate(self.config.sponsor_id_attempts).await?;

    let now = Utc::now().naive_utc();
    let txn = self.db.begin().await?;

    let user = user::ActiveModel {
      id: Set(Uuid::new_v4().to_string()),
      first_name: Set(new.first_name),
      last_name: Set(new.last_name),
      email: Set(new.email),
      mobile: Set(new.mobile),
      password: Set(hashed),
      sponsor_id: Set(sponsor_id),
      parent_sponsor_id: Set(parent.as_ref().map(|p| p.sponsor_id.clone())),
      referral_count: Set(0),
      balance: Set(0.0),
      total_investment: Set(0.0),
      total_withdrawn: Set(0.0),
      kyc_status: Set(KycStatus::Pending),
      is_admin: Set(false),
      created_at: Set(now),
      updated_at: Set(now),
    }
    .insert(&txn)
    .await?;

    if let Some(parent) = parent {
      let bumped = user::Entity::update_many()
        .col_expr(
          user::Column::ReferralCount,
          Expr::col(user::Column::ReferralCount).add(1),
        )
        .col_expr(user::Column::UpdatedAt, Expr::value(now))
        .filter(user::Column::Id.eq(parent.id))
        .exec(&txn)
        .await?;

      if bumped.rows_affected == 0 {
        return Err(Error::Validation("Invalid sponsor ID".into()));
      }
    }

    txn.commit().await?;

    info!("registered user {} ({})", user.id, user.sponsor_id);
    Ok(user)
  }

  pub async fn login(&self, email: &str, plain: &str) -> Result<user::Model> {
    let email = email.trim().to_lowercase();
    let Some(user) = sv::User::new(self.db).by_email(&email).await? else {
      return Err(Error::InvalidCredentials);
    };

    if !password::verify(plain.to_string(), user.password.clone()).await? {
      return Err(Error::InvalidCredentials);
    }

    Ok(user)
  }
}

/// Trims input, folds email case and checks required fields.
fn normalize(new: NewUser) -> Result<NewUser> {
  let new = NewUser {
    first_name: new.first_name.trim().to_string(),
    last_name: new.last_name.trim().to_string(),
    email: new.email.trim().to_lowercase(),
    mobile: new.mobile.trim().to_string(),
    password: new.password,
    sponsor_id: new
      .sponsor_id
      .map(|code| code.trim().to_uppercase())
      .filter(|code| !code.is_empty()),
  };

  if new.first_name.is_empty()
    || new.last_name.is_empty()
    || new.email.is_empty()
    || new.mobile.is_empty()
    || new.password.is_empty()
  {
    return Err(Error::Validation("All required fields must be provided".into()));
  }
  if !new.email.contains('@') {
    return Err(Error::Validation("Invalid email address".into()));
  }
  if new.password.chars().count() < MIN_PASSWORD_LEN {
    return Err(Error::Validation(format!(
      "Password must be at least {MIN_PASSWORD_LEN} characters"
    )));
  }

  Ok(new)
}
