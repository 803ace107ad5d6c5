use crate::{
    abstract_trait::order::{DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::response::OrderResponse,
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderQueryService {
    pub query: DynOrderQueryRepository,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(&self) -> Result<Vec<OrderResponse>, ServiceError> {
        let orders = self.query.find_all().await.map_err(|e| {
            error!("❌ Failed to fetch all orders: {e:?}");
            ServiceError::Repo(e)
        })?;

        info!("✅ Retrieved {} orders", orders.len());
        Ok(orders.into_iter().map(OrderResponse::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<OrderResponse, ServiceError> {
        let order = self
            .query
            .find_by_id(id)
            .await
            .map_err(ServiceError::Repo)?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(OrderResponse::from(order))
    }
}
