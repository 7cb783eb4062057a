use crate::{
  entity::{TransactionType, transaction},
  prelude::*,
};

/// Value of the `type` query parameter that disables filtering.
pub const ALL_TYPES: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFilter {
  All,
  Only(TransactionType),
  /// A label no transaction can carry.
  Unknown,
}

impl TypeFilter {
  pub fn parse(raw: Option<&str>) -> Self {
    match raw.map(str::trim) {
      None | Some("") | Some(ALL_TYPES) => TypeFilter::All,
      Some(label) => TransactionType::from_label(label)
        .map_or(TypeFilter::Unknown, TypeFilter::Only),
    }
  }
}

/// Read side of the append-only transaction log.
pub struct Ledger<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> Ledger<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  pub async fn list(
    &self,
    user_id: &str,
    filter: TypeFilter,
  ) -> Result<Vec<transaction::Model>> {
    let mut query = transaction::Entity::find()
      .filter(transaction::Column::UserId.eq(user_id));

    match filter {
      TypeFilter::All => {}
      TypeFilter::Only(ty) => {
        query = query.filter(transaction::Column::TxType.eq(ty));
      }
      TypeFilter::Unknown => return Ok(Vec::new()),
    }

    Ok(
      query
        .order_by_desc(transaction::Column::CreatedAt)
        .order_by_desc(transaction::Column::Id)
        .all(self.db)
        .await?,
    )
  }

  pub async fn recent(
    &self,
    user_id: &str,
    limit: u64,
  ) -> Result<Vec<transaction::Model>> {
    Ok(
      transaction::Entity::find()
        .filter(transaction::Column::UserId.eq(user_id))
        .order_by_desc(transaction::Column::CreatedAt)
        .order_by_desc(transaction::Column::Id)
        .limit(limit)
        .all(self.db)
        .await?,
    )
  }

  /// Sum of the user's income-type transaction amounts.
  pub async fn total_earnings(&self, user_id: &str) -> Result<f64> {
    let amounts: Vec<f64> = transaction::Entity::find()
      .select_only()
      .column(transaction::Column::Amount)
      .filter(transaction::Column::UserId.eq(user_id))
      .filter(transaction::Column::TxType.is_in(TransactionType::INCOME))
      .into_tuple()
      .all(self.db)
      .await?;

    Ok(amounts.into_iter().sum())
  }
}
