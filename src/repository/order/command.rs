use crate::{
    abstract_trait::order::OrderCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateOrderRequest, UpdateOrderRequest},
    errors::RepositoryError,
    integrity::DeleteOutcome,
    model::Order as OrderModel,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create(&self, req: &CreateOrderRequest) -> Result<OrderModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // id_user / id_product are checked by the store's foreign keys, not
        // here; a violation surfaces as RepositoryError::ForeignKey.
        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            INSERT INTO orders (id_user, id_product, date_order, status)
            VALUES (?, ?, ?, ?)
            RETURNING id, id_user, id_product, date_order, status
            "#,
        )
        .bind(req.id_user)
        .bind(req.id_product)
        .bind(&req.date_order)
        .bind(&req.status)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create order for user {} / product {}: {:?}",
                req.id_user, req.id_product, err
            );
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created order ID {} for user {}",
            order.id, order.id_user
        );
        Ok(order)
    }

    async fn update(
        &self,
        id: i64,
        req: &UpdateOrderRequest,
    ) -> Result<Option<OrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            UPDATE orders
            SET id_user    = ?,
                id_product = ?,
                date_order = ?,
                status     = ?
            WHERE id = ?
            RETURNING id, id_user, id_product, date_order, status
            "#,
        )
        .bind(req.id_user)
        .bind(req.id_product)
        .bind(&req.date_order)
        .bind(&req.status)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update order ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        if order.is_some() {
            info!("🔄 Updated order ID {}", id);
        }
        Ok(order)
    }

    async fn delete(&self, id: i64) -> Result<DeleteOutcome, RepositoryError> {
        info!("🗑️ Deleting order: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // Targets only the orders table; a user or product row is never
        // touched by an order delete.
        let affected = sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete order {}: {:?}", id, e);
                RepositoryError::from(e)
            })?
            .rows_affected();

        if affected > 0 {
            info!("✅ Deleted order ID {}", id);
            Ok(DeleteOutcome::Deleted)
        } else {
            info!("🚫 Order ID {} not found", id);
            Ok(DeleteOutcome::NotFound)
        }
    }
}
