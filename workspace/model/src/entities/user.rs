use sea_orm::entity::prelude::*;

/// Represents a registered user of the lunch service.
/// Only the Argon2 hash of the password is persisted, never the plaintext.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    // A user can record multiple meals.
    #[sea_orm(has_many = "super::meal::Entity")]
    Meal,
    // A user can place multiple orders.
    #[sea_orm(has_many = "super::order::Entity")]
    Order,
    #[sea_orm(has_many = "super::session::Entity")]
    Session,
}

impl ActiveModelBehavior for ActiveModel {}
