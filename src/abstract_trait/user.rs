use crate::{
    domain::{
        requests::{CreateUserRequest, UpdateUserRequest},
        response::{MessageResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
    integrity::{DeleteOutcome, DeleteVerdict},
    model::User as UserModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserQueryRepository = Arc<dyn UserQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<UserModel>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<UserModel>, RepositoryError>;
}

pub type DynUserCommandRepository = Arc<dyn UserCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserCommandRepositoryTrait {
    /// `hashed_passw` is the bcrypt hash, never the submitted plaintext.
    async fn create(
        &self,
        req: &CreateUserRequest,
        hashed_passw: &str,
    ) -> Result<UserModel, RepositoryError>;
    async fn update(
        &self,
        id: i64,
        req: &UpdateUserRequest,
        hashed_passw: &str,
    ) -> Result<Option<UserModel>, RepositoryError>;

    /// Deletes the user only if no order references it, atomically with
    /// respect to concurrent order creation.
    async fn delete_guarded(&self, id: i64) -> Result<DeleteOutcome, RepositoryError>;
}

pub type DynUserQueryService = Arc<dyn UserQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<UserResponse>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<UserResponse, ServiceError>;
}

pub type DynUserCommandService = Arc<dyn UserCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserCommandServiceTrait {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<UserResponse, ServiceError>;
    async fn update_user(
        &self,
        id: i64,
        req: &UpdateUserRequest,
    ) -> Result<UserResponse, ServiceError>;

    /// Advisory check; the authoritative check runs inside `delete_user`.
    async fn can_delete_user(&self, id: i64) -> Result<DeleteVerdict, ServiceError>;
    async fn delete_user(&self, id: i64) -> Result<MessageResponse, ServiceError>;
}
