use crate::{
    abstract_trait::order::{DynOrderCommandRepository, OrderCommandServiceTrait},
    domain::{
        requests::{CreateOrderRequest, UpdateOrderRequest},
        response::{MessageResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
    integrity::DeleteOutcome,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderCommandService {
    pub command: DynOrderCommandRepository,
}

impl OrderCommandService {
    pub fn new(command: DynOrderCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<OrderResponse, ServiceError> {
        let order = self.command.create(req).await.map_err(|e| {
            error!("❌ Failed to create order: {e:?}");
            ServiceError::Repo(e)
        })?;

        Ok(OrderResponse::from(order))
    }

    async fn update_order(
        &self,
        id: i64,
        req: &UpdateOrderRequest,
    ) -> Result<OrderResponse, ServiceError> {
        let order = self
            .command
            .update(id, req)
            .await
            .map_err(ServiceError::Repo)?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(OrderResponse::from(order))
    }

    async fn delete_order(&self, id: i64) -> Result<MessageResponse, ServiceError> {
        match self.command.delete(id).await? {
            DeleteOutcome::Deleted => {
                info!("✅ Order {id} deleted");
                Ok(MessageResponse::new("Order deleted"))
            }
            DeleteOutcome::NotFound => Err(ServiceError::Repo(RepositoryError::NotFound)),
            DeleteOutcome::Denied(reason) => {
                // Order deletes are unguarded; a denial here means a
                // repository bug.
                Err(ServiceError::Internal(format!(
                    "unexpected denial for order delete: {reason}"
                )))
            }
        }
    }
}
