use crate::model::Order as OrderModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: i64,
    pub id_user: i64,
    pub id_product: i64,
    pub date_order: String,
    pub status: String,
}

impl From<OrderModel> for OrderResponse {
    fn from(value: OrderModel) -> Self {
        OrderResponse {
            id: value.id,
            id_user: value.id_user,
            id_product: value.id_product,
            date_order: value.date_order,
            status: value.status,
        }
    }
}
