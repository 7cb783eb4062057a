use crate::{
  entity::{transaction, user},
  prelude::*,
  sv::{self, Ledger},
};

pub const RECENT_TRANSACTIONS: u64 = 5;

#[derive(Debug)]
pub struct Overview {
  pub user: user::Model,
  pub direct_referrals: u64,
  pub total_earnings: f64,
  pub recent: Vec<transaction::Model>,
}

pub struct Dashboard<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> Dashboard<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  /// Recomputed on every call.
  pub async fn overview(&self, user_id: &str) -> Result<Overview> {
    let user = sv::User::new(self.db).get(user_id).await?;
    let ledger = Ledger::new(self.db);

    let direct_referrals =
      sv::Sponsor::new(self.db).direct_referrals(&user.sponsor_id).await?;
    let total_earnings = ledger.total_earnings(&user.id).await?;
    let recent = ledger.recent(&user.id, RECENT_TRANSACTIONS).await?;

    Ok(Overview { user, direct_referrals, total_earnings, recent })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    entity::TransactionType,
    sv::test_utils::{fixtures, test_db},
  };

  #[tokio::test]
  async fn test_overview() {
    let db = test_db::setup().await;
    fixtures::insert_user(&db, "u-1", "ann@example.com", "5550001", "SPON0001")
      .await;
    let mut kid =
      fixtures::user("u-2", "kid@example.com", "5550002", "SPON0002");
    kid.parent_sponsor_id = Some("SPON0001".into());
    fixtures::insert(&db, kid).await;

    for minute in 0..7 {
      let ty = if minute % 2 == 0 {
        TransactionType::FsIncome
      } else {
        TransactionType::Deposit
      };
      fixtures::insert_tx(&db, "u-1", ty, 10.0, fixtures::at(minute)).await;
    }

    let overview = Dashboard::new(&db).overview("u-1").await.unwrap();

    assert_eq!(overview.user.id, "u-1");
    assert_eq!(overview.direct_referrals, 1);
    assert_eq!(overview.total_earnings, 40.0);
    assert_eq!(overview.recent.len(), 5);
    assert_eq!(overview.recent[0].created_at, fixtures::at(6));
  }

  #[tokio::test]
  async fn test_overview_empty() {
    let db = test_db::setup().await;
    fixtures::insert_user(&db, "u-1", "ann@example.com", "5550001", "SPON0001")
      .await;

    let overview = Dashboard::new(&db).overview("u-1").await.unwrap();
    assert_eq!(overview.total_earnings, 0.0);
    assert_eq!(overview.direct_referrals, 0);
    assert!(overview.recent.is_empty());

    let missing = Dashboard::new(&db).overview("ghost").await;
    assert!(matches!(missing, Err(Error::NotFound(_))));
  }
}
