use rand::Rng;

use crate::{entity::user, prelude::*};

pub const SPONSOR_ID_LEN: usize = 8;
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub fn random_code() -> String {
  let mut rng = rand::thread_rng();
  (0..SPONSOR_ID_LEN)
    .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
    .collect()
}

pub fn is_well_formed(code: &str) -> bool {
  code.len() == SPONSOR_ID_LEN
    && code.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

pub struct Sponsor<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> Sponsor<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  /// Looks up the user owning `code`; unknown codes are a client error.
  pub async fn resolve(&self, code: &str) -> Result<user::Model> {
    user::Entity::find()
      .filter(user::Column::SponsorId.eq(code))
      .one(self.db)
      .await?
      .ok_or_else(|| Error::Validation("Invalid sponsor ID".into()))
  }

  pub async fn is_taken(&self, code: &str) -> Result<bool> {
    let count = user::Entity::find()
      .filter(user::Column::SponsorId.eq(code))
      .count(self.db)
      .await?;
    Ok(count > 0)
  }

  /// Draws random codes until one is free in the store.
  ///
  /// The check and the later insert are not atomic; the unique index on
  /// `users.sponsor_id` rejects the loser of a concurrent race.
  pub async fn generate(&self, max_attempts: u32) -> Result<String> {
    for attempt in 1..=max_attempts {
      let code = random_code();
      if !self.is_taken(&code).await? {
        return Ok(code);
      }
      debug!("sponsor id collision on attempt {attempt}");
    }

    Err(Error::Internal(format!(
      "no free sponsor id after {max_attempts} attempts"
    )))
  }

  /// Users whose `parent_sponsor_id` points at `code`.
  pub async fn direct_referrals(&self, code: &str) -> Result<u64> {
    Ok(
      user::Entity::find()
        .filter(user::Column::ParentSponsorId.eq(code))
        .count(self.db)
        .await?,
    )
  }
}
