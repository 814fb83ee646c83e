use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Consoles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Consoles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Consoles::Name).string().not_null())
                    .col(ColumnDef::new(Consoles::Model).string().not_null())
                    .col(
                        ColumnDef::new(Consoles::ModelNormalized)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Consoles::ReleaseYear).integer().not_null())
                    .col(ColumnDef::new(Consoles::Manufacturer).string().not_null())
                    .col(
                        ColumnDef::new(Consoles::SerialNumberBox)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Consoles::SerialNumberConsole)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Consoles::CompleteInBox)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Consoles::Condition).string().not_null())
                    .col(ColumnDef::new(Consoles::Inventory).integer().not_null())
                    .col(
                        ColumnDef::new(Consoles::Sealed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_consoles_model_normalized")
                    .table(Consoles::Table)
                    .col(Consoles::ModelNormalized)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Consoles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Consoles {
    Table,
    Id,
    Name,
    Model,
    ModelNormalized,
    ReleaseYear,
    Manufacturer,
    SerialNumberBox,
    SerialNumberConsole,
    CompleteInBox,
    Condition,
    Inventory,
    Sealed,
}
