use crate::{
    abstract_trait::{
        order::DynOrderQueryRepository,
        product::{DynProductCommandRepository, ProductCommandServiceTrait},
    },
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        response::{MessageResponse, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
    integrity::{self, DeleteOutcome, DeleteVerdict},
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandService {
    pub command: DynProductCommandRepository,
    pub order_query: DynOrderQueryRepository,
}

impl ProductCommandService {
    pub fn new(
        command: DynProductCommandRepository,
        order_query: DynOrderQueryRepository,
    ) -> Self {
        Self {
            command,
            order_query,
        }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        let product = self.command.create(req).await.map_err(|e| {
            error!("❌ Failed to create product: {e:?}");
            ServiceError::Repo(e)
        })?;

        Ok(ProductResponse::from(product))
    }

    async fn update_product(
        &self,
        id: i64,
        req: &UpdateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        let product = self
            .command
            .update(id, req)
            .await
            .map_err(ServiceError::Repo)?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(ProductResponse::from(product))
    }

    async fn can_delete_product(&self, id: i64) -> Result<DeleteVerdict, ServiceError> {
        let statuses = self
            .order_query
            .statuses_for_product(id)
            .await
            .map_err(ServiceError::Repo)?;

        Ok(integrity::product_verdict(&statuses))
    }

    async fn delete_product(&self, id: i64) -> Result<MessageResponse, ServiceError> {
        match self.command.delete_guarded(id).await? {
            DeleteOutcome::Deleted => {
                info!("✅ Product {id} deleted");
                Ok(MessageResponse::new("Product deleted"))
            }
            DeleteOutcome::NotFound => Err(ServiceError::Repo(RepositoryError::NotFound)),
            DeleteOutcome::Denied(reason) => {
                info!("⛔ Product {id} delete denied: {reason}");
                Err(ServiceError::DeniedDelete(reason))
            }
        }
    }
}
