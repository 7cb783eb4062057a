use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum TransactionType {
  #[sea_orm(string_value = "FS Income")]
  #[serde(rename = "FS Income")]
  FsIncome,
  #[sea_orm(string_value = "DRI Income")]
  #[serde(rename = "DRI Income")]
  DriIncome,
  #[sea_orm(string_value = "SmartLine Income")]
  #[serde(rename = "SmartLine Income")]
  SmartLineIncome,
  #[sea_orm(string_value = "DAS Income")]
  #[serde(rename = "DAS Income")]
  DasIncome,
  #[sea_orm(string_value = "Referral Income")]
  #[serde(rename = "Referral Income")]
  ReferralIncome,
  #[sea_orm(string_value = "Deposit")]
  Deposit,
  #[sea_orm(string_value = "Withdrawal")]
  Withdrawal,
  #[sea_orm(string_value = "Investment")]
  Investment,
}

impl TransactionType {
  /// Types that count towards dashboard earnings.
  pub const INCOME: [TransactionType; 4] = [
    TransactionType::FsIncome,
    TransactionType::DriIncome,
    TransactionType::SmartLineIncome,
    TransactionType::DasIncome,
  ];

  pub fn from_label(label: &str) -> Option<Self> {
    Self::try_from_value(&label.to_string()).ok()
  }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i32,
  pub user_id: String,
  pub tx_type: TransactionType,
  pub amount: f64,
  pub description: Option<String>,
  pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
