use chrono::Utc;
use sea_orm::entity::prelude::*;

/// User database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// User ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Username (unique)
    #[sea_orm(unique)]
    pub username: String,

    /// Password hash (PHC string)
    pub password_hash: String,

    /// Stored role string
    pub role: String,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last successful login
    pub last_login_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to the domain user model
    pub fn to_domain(&self) -> crate::core::models::User {
        crate::core::models::User {
            id: self.id,
            username: self.username.clone(),
            password_hash: self.password_hash.clone(),
            role: self.role.clone(),
            created_at: self.created_at.with_timezone(&Utc),
            last_login_at: self.last_login_at.map(|t| t.with_timezone(&Utc)),
        }
    }
}
