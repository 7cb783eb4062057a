pub mod auth;
pub mod dashboard;
pub mod ledger;
pub mod package;
pub mod password;
pub mod sponsor;
#[cfg(test)]
pub mod test_utils;
pub mod token;
pub mod user;

pub use auth::{Auth, NewUser};
pub use dashboard::Dashboard;
pub use ledger::{Ledger, TypeFilter};
pub use sponsor::Sponsor;
pub use token::{Claims, Token};
pub use user::{ProfileUpdate, User};
