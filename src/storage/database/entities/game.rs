use sea_orm::entity::prelude::*;

/// Game database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub release_year: i32,
    pub manufacturer: String,
    pub description: Option<String>,
    pub genre: String,
    pub platform: String,
    /// Lowercased, space-stripped platform used for filtering
    pub platform_normalized: String,
    pub score: i32,
    pub complete_in_box: bool,
    pub condition: String,
    pub inventory: i32,
    pub sealed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to the domain game model
    pub fn to_domain(&self) -> crate::core::models::Game {
        crate::core::models::Game {
            id: self.id,
            title: self.title.clone(),
            release_year: self.release_year,
            manufacturer: self.manufacturer.clone(),
            description: self.description.clone(),
            genre: self.genre.clone(),
            platform: self.platform.clone(),
            platform_normalized: self.platform_normalized.clone(),
            score: self.score,
            complete_in_box: self.complete_in_box,
            condition: self.condition.clone(),
            inventory: self.inventory,
            sealed: self.sealed,
        }
    }
}
