use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// `passw` holds a bcrypt hash, never the submitted plaintext.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub passw: String,
}
