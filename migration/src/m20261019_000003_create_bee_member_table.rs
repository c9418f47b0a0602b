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
                    .table(BeeMember::Table)
                    .if_not_exists()
                    .col(pk_auto(BeeMember::Id))
                    .col(integer(BeeMember::BeeId))
                    .col(integer(BeeMember::UserId))
                    .col(string(BeeMember::Role))
                    .col(
                        timestamp_with_time_zone(BeeMember::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bee_member_bee_id")
                            .from(BeeMember::Table, BeeMember::BeeId)
                            .to(Bee::Table, Bee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bee_member_user_id")
                            .from(BeeMember::Table, BeeMember::UserId)
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
                    .name("idx_bee_member_bee_user")
                    .table(BeeMember::Table)
                    .col(BeeMember::BeeId)
                    .col(BeeMember::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BeeMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BeeMember {
    Table,
    Id,
    BeeId,
    UserId,
    Role,
    CreatedAt,
}
