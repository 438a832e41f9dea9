use super::{lunch, user};
use sea_orm::entity::prelude::*;

/// A record of a lunch being requested by a user, timestamped at creation.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// The lunch that was ordered.
    pub lunch_id: i32,
    /// The user who placed the order.
    pub user_id: i32,
    /// Server-assigned creation time.
    pub timestamp: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// An order references exactly one lunch.
    #[sea_orm(
        belongs_to = "super::lunch::Entity",
        from = "Column::LunchId",
        to = "super::lunch::Column::Id"
    )]
    Lunch,
    /// An order is placed by exactly one user.
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<lunch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lunch.def()
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
