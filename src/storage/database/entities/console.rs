use sea_orm::entity::prelude::*;

/// Console database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "consoles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub model: String,
    /// Lowercased, space-stripped model used for filtering
    pub model_normalized: String,
    pub release_year: i32,
    pub manufacturer: String,
    pub serial_number_box: String,
    /// Serial number on the unit itself (unique)
    #[sea_orm(unique)]
    pub serial_number_console: String,
    pub complete_in_box: bool,
    pub condition: String,
    pub inventory: i32,
    pub sealed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to the domain console model
    pub fn to_domain(&self) -> crate::core::models::Console {
        crate::core::models::Console {
            id: self.id,
            name: self.name.clone(),
            model: self.model.clone(),
            model_normalized: self.model_normalized.clone(),
            release_year: self.release_year,
            manufacturer: self.manufacturer.clone(),
            serial_number_box: self.serial_number_box.clone(),
            serial_number_console: self.serial_number_console.clone(),
            complete_in_box: self.complete_in_box,
            condition: self.condition.clone(),
            inventory: self.inventory,
            sealed: self.sealed,
        }
    }
}
