//! bcrypt runs on the blocking pool so slow hashes do not stall the runtime.

use crate::prelude::*;

pub async fn hash(plain: String, cost: u32) -> Result<String> {
  tokio::task::spawn_blocking(move || bcrypt::hash(plain, cost))
    .await
    .map_err(|err| Error::Internal(format!("hash task failed: {err}")))?
    .map_err(|err| Error::Internal(format!("bcrypt: {err}")))
}

pub async fn verify(plain: String, hashed: String) -> Result<bool> {
  let result =
    tokio::task::spawn_blocking(move || bcrypt::verify(plain, &hashed))
      .await
      .map_err(|err| Error::Internal(format!("verify task failed: {err}")))?;

  match result {
    Ok(matches) => Ok(matches),
    Err(err) => {
      warn!("stored password hash is unreadable: {err}");
      Ok(false)
    }
  }
}
