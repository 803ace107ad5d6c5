use crate::model::User as UserModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `passw` echoes the stored bcrypt hash, keeping the full-row contract
/// without ever returning the submitted plaintext.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub passw: String,
}

impl From<UserModel> for UserResponse {
    fn from(value: UserModel) -> Self {
        UserResponse {
            id: value.id,
            firstname: value.firstname,
            lastname: value.lastname,
            email: value.email,
            passw: value.passw,
        }
    }
}
