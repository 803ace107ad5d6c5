use crate::{
    domain::{
        requests::{CreateOrderRequest, UpdateOrderRequest},
        response::{MessageResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
    integrity::DeleteOutcome,
    model::Order as OrderModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<OrderModel>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<OrderModel>, RepositoryError>;

    /// Statuses of every order referencing the product; feeds the advisory
    /// product delete check.
    async fn statuses_for_product(&self, product_id: i64) -> Result<Vec<String>, RepositoryError>;

    /// Number of orders referencing the user, regardless of status.
    async fn count_for_user(&self, user_id: i64) -> Result<i64, RepositoryError>;
}

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    async fn create(&self, req: &CreateOrderRequest) -> Result<OrderModel, RepositoryError>;
    async fn update(
        &self,
        id: i64,
        req: &UpdateOrderRequest,
    ) -> Result<Option<OrderModel>, RepositoryError>;

    /// Unguarded: nothing depends on an order's existence. Deletes only the
    /// order row.
    async fn delete(&self, id: i64) -> Result<DeleteOutcome, RepositoryError>;
}

pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<OrderResponse>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<OrderResponse, ServiceError>;
}

pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<OrderResponse, ServiceError>;
    async fn update_order(
        &self,
        id: i64,
        req: &UpdateOrderRequest,
    ) -> Result<OrderResponse, ServiceError>;
    async fn delete_order(&self, id: i64) -> Result<MessageResponse, ServiceError>;
}
