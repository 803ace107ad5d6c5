use crate::{
    abstract_trait::user::UserCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateUserRequest, UpdateUserRequest},
    errors::RepositoryError,
    integrity::{DeleteOutcome, DenyDeleteReason},
    model::User as UserModel,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct UserCommandRepository {
    db: ConnectionPool,
}

impl UserCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create(
        &self,
        req: &CreateUserRequest,
        hashed_passw: &str,
    ) -> Result<UserModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, UserModel>(
            r#"
            INSERT INTO users (firstname, lastname, email, passw)
            VALUES (?, ?, ?, ?)
            RETURNING id, firstname, lastname, email, passw
            "#,
        )
        .bind(&req.firstname)
        .bind(&req.lastname)
        .bind(&req.email)
        .bind(hashed_passw)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create user {:?}: {:?}", req.email, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created user ID {}", user.id);
        Ok(user)
    }

    async fn update(
        &self,
        id: i64,
        req: &UpdateUserRequest,
        hashed_passw: &str,
    ) -> Result<Option<UserModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, UserModel>(
            r#"
            UPDATE users
            SET firstname = ?,
                lastname  = ?,
                email     = ?,
                passw     = ?
            WHERE id = ?
            RETURNING id, firstname, lastname, email, passw
            "#,
        )
        .bind(&req.firstname)
        .bind(&req.lastname)
        .bind(&req.email)
        .bind(hashed_passw)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update user ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        if user.is_some() {
            info!("🔄 Updated user ID {}", id);
        }
        Ok(user)
    }

    async fn delete_guarded(&self, id: i64) -> Result<DeleteOutcome, RepositoryError> {
        info!("🗑️ Guarded delete of user: {}", id);

        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        // Any referencing order, of any status, blocks the delete. One
        // statement, so a concurrent order insert cannot land between the
        // check and the delete.
        let affected = sqlx::query(
            r#"
            DELETE FROM users
            WHERE id = ?
              AND NOT EXISTS (SELECT 1 FROM orders WHERE id_user = ?)
            "#,
        )
        .bind(id)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete user {}: {:?}", id, e);
            RepositoryError::from(e)
        })?
        .rows_affected();

        if affected > 0 {
            tx.commit().await.map_err(RepositoryError::from)?;
            info!("✅ Deleted user ID {}", id);
            return Ok(DeleteOutcome::Deleted);
        }

        let exists: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = ?)")
            .bind(id)
            .fetch_one(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        tx.commit().await.map_err(RepositoryError::from)?;

        if exists == 0 {
            info!("🚫 User ID {} not found", id);
            Ok(DeleteOutcome::NotFound)
        } else {
            info!("⛔ User ID {} still has orders, delete denied", id);
            Ok(DeleteOutcome::Denied(DenyDeleteReason::ExistingOrders))
        }
    }
}
