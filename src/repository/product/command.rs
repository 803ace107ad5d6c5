use crate::{
    abstract_trait::product::ProductCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    errors::RepositoryError,
    integrity::{DeleteOutcome, DenyDeleteReason, STATUS_DELIVERED},
    model::Product as ProductModel,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create(&self, req: &CreateProductRequest) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products (product_name, description, price)
            VALUES (?, ?, ?)
            RETURNING id, product_name, description, price
            "#,
        )
        .bind(&req.product_name)
        .bind(&req.description)
        .bind(req.price)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {:?}: {:?}", req.product_name, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created product ID {}", product.id);
        Ok(product)
    }

    async fn update(
        &self,
        id: i64,
        req: &UpdateProductRequest,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE products
            SET product_name = ?,
                description  = ?,
                price        = ?
            WHERE id = ?
            RETURNING id, product_name, description, price
            "#,
        )
        .bind(&req.product_name)
        .bind(&req.description)
        .bind(req.price)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        if product.is_some() {
            info!("🔄 Updated product ID {}", id);
        }
        Ok(product)
    }

    async fn delete_guarded(&self, id: i64) -> Result<DeleteOutcome, RepositoryError> {
        info!("🗑️ Guarded delete of product: {}", id);

        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        // The guard condition and the delete are one statement, so no order
        // created between a separate check and the delete can slip through.
        // Delivered orders referencing the row go with it via ON DELETE
        // CASCADE.
        let affected = sqlx::query(
            r#"
            DELETE FROM products
            WHERE id = ?
              AND NOT EXISTS (
                  SELECT 1 FROM orders
                  WHERE id_product = ? AND status <> ?
              )
            "#,
        )
        .bind(id)
        .bind(id)
        .bind(STATUS_DELIVERED)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete product {}: {:?}", id, e);
            RepositoryError::from(e)
        })?
        .rows_affected();

        if affected > 0 {
            tx.commit().await.map_err(RepositoryError::from)?;
            info!("✅ Deleted product ID {}", id);
            return Ok(DeleteOutcome::Deleted);
        }

        // Zero rows: classify inside the same transaction so the answer is
        // consistent with the delete that just ran.
        let exists: i64 =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM products WHERE id = ?)")
                .bind(id)
                .fetch_one(&mut *tx)
                .await
                .map_err(RepositoryError::from)?;

        tx.commit().await.map_err(RepositoryError::from)?;

        if exists == 0 {
            info!("🚫 Product ID {} not found", id);
            Ok(DeleteOutcome::NotFound)
        } else {
            info!("⛔ Product ID {} has undelivered orders, delete denied", id);
            Ok(DeleteOutcome::Denied(DenyDeleteReason::UndeliveredOrder))
        }
    }
}
