use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i64,
    pub id_user: i64,
    pub id_product: i64,
    pub date_order: String,
    pub status: String,
}
