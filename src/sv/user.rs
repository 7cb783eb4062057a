use crate::{entity::user, prelude::*};

pub struct User<'a> {
  db: &'a DatabaseConnection,
}

/// Partial profile edit; `None` leaves the field untouched.
#[derive(Debug, Default, Clone)]
pub struct ProfileUpdate {
  pub first_name: Option<String>,
  pub last_name: Option<String>,
  pub mobile: Option<String>,
}

impl<'a> User<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  pub async fn by_id(&self, id: &str) -> Result<Option<user::Model>> {
    Ok(user::Entity::find_by_id(id).one(self.db).await?)
  }

  pub async fn get(&self, id: &str) -> Result<user::Model> {
    self.by_id(id).await?.ok_or(Error::NotFound("User"))
  }

  /// `email` must already be case-folded.
  pub async fn by_email(&self, email: &str) -> Result<Option<user::Model>> {
    Ok(
      user::Entity::find()
        .filter(user::Column::Email.eq(email))
        .one(self.db)
        .await?,
    )
  }

  pub async fn by_mobile(&self, mobile: &str) -> Result<Option<user::Model>> {
    Ok(
      user::Entity::find()
        .filter(user::Column::Mobile.eq(mobile))
        .one(self.db)
        .await?,
    )
  }

  pub async fn update_profile(
    &self,
    id: &str,
    update: ProfileUpdate,
  ) -> Result<user::Model> {
    let first_name = non_blank(update.first_name, "First name")?;
    let last_name = non_blank(update.last_name, "Last name")?;
    let mobile = non_blank(update.mobile, "Mobile")?;

    let user = self.get(id).await?;

    if let Some(mobile) = &mobile
      && let Some(owner) = self.by_mobile(mobile).await?
      && owner.id != user.id
    {
      return Err(Error::Conflict("Mobile number already registered".into()));
    }

    let mut active: user::ActiveModel = user.into();
    if let Some(first_name) = first_name {
      active.first_name = Set(first_name);
    }
    if let Some(last_name) = last_name {
      active.last_name = Set(last_name);
    }
    if let Some(mobile) = mobile {
      active.mobile = Set(mobile);
    }
    active.updated_at = Set(Utc::now().naive_utc());

    Ok(active.update(self.db).await?)
  }

  pub async fn all_newest_first(&self) -> Result<Vec<user::Model>> {
    Ok(
      user::Entity::find()
        .order_by_desc(user::Column::CreatedAt)
        .all(self.db)
        .await?,
    )
  }
}

fn non_blank(value: Option<String>, field: &str) -> Result<Option<String>> {
  match value.map(|v| v.trim().to_string()) {
    Some(v) if v.is_empty() => {
      Err(Error::Validation(format!("{field} cannot be empty")))
    }
    other => Ok(other),
  }
}
