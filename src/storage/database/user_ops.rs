use crate::auth::store::CredentialStore;
use crate::core::models::{NewUser, Role, User};
use crate::utils::error::{Result, VaultError};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, SqlErr,
};
use tracing::debug;
use uuid::Uuid;

use super::connection::Database;
use super::entities::{self, user};

#[async_trait]
impl CredentialStore for Database {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        debug!("finding user by username: {}", username);

        let model = entities::User::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let model = entities::User::find_by_id(id).one(&self.db).await?;
        Ok(model.map(|m| m.to_domain()))
    }

    async fn insert_user(&self, new_user: NewUser) -> Result<User> {
        debug!("creating user: {}", new_user.username);

        let now = Utc::now();
        let active = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(new_user.username),
            password_hash: Set(new_user.password_hash),
            role: Set(new_user.role.as_str().to_string()),
            created_at: Set(now.into()),
            last_login_at: Set(None),
        };

        // Uniqueness is enforced by the store's constraint, not by a
        // check-then-insert.
        match active.insert(&self.db).await {
            Ok(model) => Ok(model.to_domain()),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(VaultError::DuplicateUsername),
                _ => Err(VaultError::Database(e)),
            },
        }
    }

    async fn update_role(&self, id: Uuid, role: Role) -> Result<()> {
        debug!("updating role for user {} to {}", id, role);

        let model = entities::User::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| VaultError::NotFound("user".into()))?;

        let mut active: user::ActiveModel = model.into();
        active.role = Set(role.as_str().to_string());
        active.update(&self.db).await?;
        Ok(())
    }

    async fn record_login(&self, id: Uuid) -> Result<()> {
        let model = entities::User::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| VaultError::NotFound("user".into()))?;

        let mut active: user::ActiveModel = model.into();
        active.last_login_at = Set(Some(Utc::now().into()));
        active.update(&self.db).await?;
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let models = entities::User::find()
            .order_by_asc(user::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }
}
