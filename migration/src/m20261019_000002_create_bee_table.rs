use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bee::Table)
                    .if_not_exists()
                    .col(pk_auto(Bee::Id))
                    .col(string(Bee::Title))
                    .col(text(Bee::Description))
                    .col(time(Bee::StartTime))
                    .col(time(Bee::EndTime))
                    .col(integer(Bee::Pay))
                    .col(
                        timestamp_with_time_zone(Bee::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bee {
    Table,
    Id,
    Title,
    Description,
    StartTime,
    EndTime,
    Pay,
    CreatedAt,
}
