use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// Only maximum lengths are enforced; the contract accepts any string
// content, `email` included.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(max = 32, message = "firstname must be at most 32 characters"))]
    #[schema(example = "Alice")]
    pub firstname: String,

    #[validate(length(max = 32, message = "lastname must be at most 32 characters"))]
    #[schema(example = "Doe")]
    pub lastname: String,

    #[validate(length(max = 128, message = "email must be at most 128 characters"))]
    #[schema(example = "alice@example.com")]
    pub email: String,

    #[validate(length(max = 32, message = "passw must be at most 32 characters"))]
    pub passw: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(length(max = 32, message = "firstname must be at most 32 characters"))]
    pub firstname: String,

    #[validate(length(max = 32, message = "lastname must be at most 32 characters"))]
    pub lastname: String,

    #[validate(length(max = 128, message = "email must be at most 128 characters"))]
    pub email: String,

    #[validate(length(max = 32, message = "passw must be at most 32 characters"))]
    pub passw: String,
}
