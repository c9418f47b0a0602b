use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub bee_id: i32,
    pub user_id: i32,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub image_url: String,
    pub target_date: Date,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bee::Entity",
        from = "Column::BeeId",
        to = "super::bee::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Bee,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::bee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bee.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
