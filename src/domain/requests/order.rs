use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    #[validate(range(min = 1, message = "id_user is required"))]
    #[schema(example = 1)]
    pub id_user: i64,

    #[validate(range(min = 1, message = "id_product is required"))]
    #[schema(example = 1)]
    pub id_product: i64,

    #[validate(length(max = 10, message = "date_order must be at most 10 characters"))]
    #[schema(example = "2025-01-15")]
    pub date_order: String,

    #[validate(length(max = 128, message = "status must be at most 128 characters"))]
    #[schema(example = "paid")]
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderRequest {
    #[validate(range(min = 1, message = "id_user is required"))]
    pub id_user: i64,

    #[validate(range(min = 1, message = "id_product is required"))]
    pub id_product: i64,

    #[validate(length(max = 10, message = "date_order must be at most 10 characters"))]
    pub date_order: String,

    #[validate(length(max = 128, message = "status must be at most 128 characters"))]
    #[schema(example = "delivered")]
    pub status: String,
}
