use crate::{
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        response::{MessageResponse, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
    integrity::{DeleteOutcome, DeleteVerdict},
    model::Product as ProductModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<ProductModel>, RepositoryError>;
}

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create(&self, req: &CreateProductRequest) -> Result<ProductModel, RepositoryError>;
    async fn update(
        &self,
        id: i64,
        req: &UpdateProductRequest,
    ) -> Result<Option<ProductModel>, RepositoryError>;

    /// Deletes the product only if no undelivered order references it. The
    /// check and the delete are atomic with respect to concurrent order
    /// creation.
    async fn delete_guarded(&self, id: i64) -> Result<DeleteOutcome, RepositoryError>;
}

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<ProductResponse, ServiceError>;
}

pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError>;
    async fn update_product(
        &self,
        id: i64,
        req: &UpdateProductRequest,
    ) -> Result<ProductResponse, ServiceError>;

    /// Advisory check against current store contents; the authoritative check
    /// runs inside `delete_product`.
    async fn can_delete_product(&self, id: i64) -> Result<DeleteVerdict, ServiceError>;
    async fn delete_product(&self, id: i64) -> Result<MessageResponse, ServiceError>;
}
