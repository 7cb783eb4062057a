use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum KycStatus {
  #[sea_orm(string_value = "pending")]
  #[default]
  Pending,
  #[sea_orm(string_value = "submitted")]
  Submitted,
  #[sea_orm(string_value = "verified")]
  Verified,
  #[sea_orm(string_value = "rejected")]
  Rejected,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
  #[sea_orm(primary_key, auto_increment = false)]
  pub id: String,
  pub first_name: String,
  pub last_name: String,
  #[sea_orm(unique)]
  pub email: String,
  #[sea_orm(unique)]
  pub mobile: String,
  /// bcrypt hash, never leaves the service layer
  pub password: String,
  #[sea_orm(unique)]
  pub sponsor_id: String,
  pub parent_sponsor_id: Option<String>,
  pub referral_count: i32,
  pub balance: f64,
  pub total_investment: f64,
  pub total_withdrawn: f64,
  pub kyc_status: KycStatus,
  pub is_admin: bool,
  pub created_at: DateTime,
  pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
