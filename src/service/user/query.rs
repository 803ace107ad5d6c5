use crate::{
    abstract_trait::user::{DynUserQueryRepository, UserQueryServiceTrait},
    domain::response::UserResponse,
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct UserQueryService {
    pub query: DynUserQueryRepository,
}

impl UserQueryService {
    pub fn new(query: DynUserQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl UserQueryServiceTrait for UserQueryService {
    async fn find_all(&self) -> Result<Vec<UserResponse>, ServiceError> {
        let users = self.query.find_all().await.map_err(|e| {
            error!("❌ Failed to fetch all users: {e:?}");
            ServiceError::Repo(e)
        })?;

        info!("✅ Retrieved {} users", users.len());
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<UserResponse, ServiceError> {
        let user = self
            .query
            .find_by_id(id)
            .await
            .map_err(ServiceError::Repo)?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(UserResponse::from(user))
    }
}
