use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(max = 32, message = "product_name must be at most 32 characters"))]
    #[schema(example = "apples")]
    pub product_name: String,

    #[validate(length(max = 1280, message = "description must be at most 1280 characters"))]
    #[schema(example = "fresh")]
    pub description: String,

    #[validate(range(exclusive_min = 0.0, message = "price must be positive"))]
    #[schema(example = 10.0)]
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(max = 32, message = "product_name must be at most 32 characters"))]
    pub product_name: String,

    #[validate(length(max = 1280, message = "description must be at most 1280 characters"))]
    pub description: String,

    #[validate(range(exclusive_min = 0.0, message = "price must be positive"))]
    pub price: f64,
}
