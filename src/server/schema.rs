//! Request and response bodies, one set per endpoint.

use serde::{Deserialize, Serialize};

use crate::{
  entity::{KycStatus, TransactionType, transaction, user},
  prelude::*,
  sv::{self, dashboard::Overview, package::Package},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterReq {
  #[serde(default)]
  pub first_name: String,
  #[serde(default)]
  pub last_name: String,
  #[serde(default)]
  pub email: String,
  #[serde(default)]
  pub mobile: String,
  #[serde(default)]
  pub password: String,
  pub sponsor_id: Option<String>,
}

impl From<RegisterReq> for sv::NewUser {
  fn from(req: RegisterReq) -> Self {
    Self {
      first_name: req.first_name,
      last_name: req.last_name,
      email: req.email,
      mobile: req.mobile,
      password: req.password,
      sponsor_id: req.sponsor_id,
    }
  }
}

#[derive(Debug, Deserialize)]
pub struct LoginReq {
  #[serde(default)]
  pub email: String,
  #[serde(default)]
  pub password: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateReq {
  pub first_name: Option<String>,
  pub last_name: Option<String>,
  pub mobile: Option<String>,
}

impl From<ProfileUpdateReq> for sv::ProfileUpdate {
  fn from(req: ProfileUpdateReq) -> Self {
    Self {
      first_name: req.first_name,
      last_name: req.last_name,
      mobile: req.mobile,
    }
  }
}

#[derive(Debug, Deserialize)]
pub struct TransactionsQuery {
  #[serde(rename = "type")]
  pub kind: Option<String>,
}

/// Public view of a user. Has no password field at all.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
  pub id: String,
  pub first_name: String,
  pub last_name: String,
  pub email: String,
  pub mobile: String,
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

impl From<user::Model> for UserView {
  fn from(user: user::Model) -> Self {
    Self {
      id: user.id,
      first_name: user.first_name,
      last_name: user.last_name,
      email: user.email,
      mobile: user.mobile,
      sponsor_id: user.sponsor_id,
      parent_sponsor_id: user.parent_sponsor_id,
      referral_count: user.referral_count,
      balance: user.balance,
      total_investment: user.total_investment,
      total_withdrawn: user.total_withdrawn,
      kyc_status: user.kyc_status,
      is_admin: user.is_admin,
      created_at: user.created_at,
      updated_at: user.updated_at,
    }
  }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionView {
  pub id: i32,
  pub user_id: String,
  #[serde(rename = "type")]
  pub kind: TransactionType,
  pub amount: f64,
  pub description: Option<String>,
  pub created_at: DateTime,
}

impl From<transaction::Model> for TransactionView {
  fn from(tx: transaction::Model) -> Self {
    Self {
      id: tx.id,
      user_id: tx.user_id,
      kind: tx.tx_type,
      amount: tx.amount,
      description: tx.description,
      created_at: tx.created_at,
    }
  }
}

#[derive(Debug, Serialize)]
pub struct AuthResp {
  pub token: String,
  pub user: UserView,
}

#[derive(Debug, Serialize)]
pub struct UserResp {
  pub user: UserView,
}

#[derive(Debug, Serialize)]
pub struct UsersResp {
  pub users: Vec<UserView>,
}

#[derive(Debug, Serialize)]
pub struct MessageResp {
  pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TransactionsResp {
  pub transactions: Vec<TransactionView>,
}

#[derive(Debug, Serialize)]
pub struct PackagesResp {
  pub packages: &'static [Package],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsView {
  pub balance: f64,
  pub total_investment: f64,
  pub total_withdrawn: f64,
  pub total_earnings: f64,
  pub direct_referrals: u64,
  pub sponsor_id: String,
  pub kyc_status: KycStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
  pub user: UserView,
  pub stats: StatsView,
  pub recent_transactions: Vec<TransactionView>,
}

#[derive(Debug, Serialize)]
pub struct DashboardResp {
  pub data: DashboardView,
}

impl From<Overview> for DashboardView {
  fn from(overview: Overview) -> Self {
    let Overview { user, direct_referrals, total_earnings, recent } = overview;

    Self {
      stats: StatsView {
        balance: user.balance,
        total_investment: user.total_investment,
        total_withdrawn: user.total_withdrawn,
        total_earnings,
        direct_referrals,
        sponsor_id: user.sponsor_id.clone(),
        kyc_status: user.kyc_status,
      },
      user: user.into(),
      recent_transactions: recent.into_iter().map(Into::into).collect(),
    }
  }
}
