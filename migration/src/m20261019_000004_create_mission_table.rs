use sea_orm_migration::{prelude::*, schema::*};

use super::{m20261019_000001_create_user_table::User, m20261019_000002_create_bee_table::Bee};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mission::Table)
                    .if_not_exists()
                    .col(pk_auto(Mission::Id))
                    .col(integer(Mission::BeeId))
                    .col(integer(Mission::UserId))
                    .col(text(Mission::Description))
                    .col(string(Mission::ImageUrl))
                    .col(date(Mission::TargetDate))
                    .col(
                        timestamp_with_time_zone(Mission::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mission_bee_id")
                            .from(Mission::Table, Mission::BeeId)
                            .to(Bee::Table, Bee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mission_user_id")
                            .from(Mission::Table, Mission::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_mission_bee_target_date")
                    .table(Mission::Table)
                    .col(Mission::BeeId)
                    .col(Mission::TargetDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Mission {
    Table,
    Id,
    BeeId,
    UserId,
    Description,
    ImageUrl,
    TargetDate,
    CreatedAt,
}
