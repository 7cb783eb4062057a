pub mod transaction;
pub mod user;

pub use transaction::TransactionType;
pub use user::KycStatus;
