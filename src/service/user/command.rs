use crate::{
    abstract_trait::{
        hashing::DynHashing,
        order::DynOrderQueryRepository,
        user::{DynUserCommandRepository, UserCommandServiceTrait},
    },
    domain::{
        requests::{CreateUserRequest, UpdateUserRequest},
        response::{MessageResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
    integrity::{self, DeleteOutcome, DeleteVerdict},
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct UserCommandService {
    pub command: DynUserCommandRepository,
    pub order_query: DynOrderQueryRepository,
    pub hashing: DynHashing,
}

impl UserCommandService {
    pub fn new(
        command: DynUserCommandRepository,
        order_query: DynOrderQueryRepository,
        hashing: DynHashing,
    ) -> Self {
        Self {
            command,
            order_query,
            hashing,
        }
    }
}

#[async_trait]
impl UserCommandServiceTrait for UserCommandService {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<UserResponse, ServiceError> {
        let hashed = self.hashing.hash_password(&req.passw).await?;

        let user = self.command.create(req, &hashed).await.map_err(|e| {
            error!("❌ Failed to create user: {e:?}");
            ServiceError::Repo(e)
        })?;

        Ok(UserResponse::from(user))
    }

    async fn update_user(
        &self,
        id: i64,
        req: &UpdateUserRequest,
    ) -> Result<UserResponse, ServiceError> {
        let hashed = self.hashing.hash_password(&req.passw).await?;

        let user = self
            .command
            .update(id, req, &hashed)
            .await
            .map_err(ServiceError::Repo)?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(UserResponse::from(user))
    }

    async fn can_delete_user(&self, id: i64) -> Result<DeleteVerdict, ServiceError> {
        let order_count = self
            .order_query
            .count_for_user(id)
            .await
            .map_err(ServiceError::Repo)?;

        Ok(integrity::user_verdict(order_count))
    }

    async fn delete_user(&self, id: i64) -> Result<MessageResponse, ServiceError> {
        match self.command.delete_guarded(id).await? {
            DeleteOutcome::Deleted => {
                info!("✅ User {id} deleted");
                Ok(MessageResponse::new("User deleted"))
            }
            DeleteOutcome::NotFound => Err(ServiceError::Repo(RepositoryError::NotFound)),
            DeleteOutcome::Denied(reason) => {
                info!("⛔ User {id} delete denied: {reason}");
                Err(ServiceError::DeniedDelete(reason))
            }
        }
    }
}
