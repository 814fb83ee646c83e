use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Games::Title).string().not_null())
                    .col(ColumnDef::new(Games::ReleaseYear).integer().not_null())
                    .col(ColumnDef::new(Games::Manufacturer).string().not_null())
                    .col(ColumnDef::new(Games::Description).text().null())
                    .col(ColumnDef::new(Games::Genre).string().not_null())
                    .col(ColumnDef::new(Games::Platform).string().not_null())
                    .col(
                        ColumnDef::new(Games::PlatformNormalized)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Games::Score).integer().not_null())
                    .col(
                        ColumnDef::new(Games::CompleteInBox)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Games::Condition).string().not_null())
                    .col(ColumnDef::new(Games::Inventory).integer().not_null())
                    .col(
                        ColumnDef::new(Games::Sealed)
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
                    .name("idx_games_platform_normalized")
                    .table(Games::Table)
                    .col(Games::PlatformNormalized)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Games {
    Table,
    Id,
    Title,
    ReleaseYear,
    Manufacturer,
    Description,
    Genre,
    Platform,
    PlatformNormalized,
    Score,
    CompleteInBox,
    Condition,
    Inventory,
    Sealed,
}
