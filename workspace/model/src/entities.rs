//! This file serves as the root for all SeaORM entity modules.
//! We define the data models for the lunch ordering application here.
//! The structure mirrors the relational schema: users authenticate and own
//! meals, lunches are the catalog, and orders tie a user to a lunch.

pub mod lunch;
pub mod meal;
pub mod order;
pub mod session;
pub mod user;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::lunch::Entity as Lunch;
    pub use super::meal::Entity as Meal;
    pub use super::order::Entity as Order;
    pub use super::session::Entity as Session;
    pub use super::user::Entity as User;
}

#[cfg(test)]
mod test {
    use chrono::Utc;
    use migration::{Migrator, MigratorTrait};
    use rust_decimal::Decimal;
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, ConnectionTrait, Database, DatabaseConnection, DbErr,
        EntityTrait, QueryFilter, QueryOrder, Set,
    };

    use super::*;
    use prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        // Connect to the SQLite database
        let db = Database::connect("sqlite::memory:").await?;

        // Enable foreign keys
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;

        // Try to apply migrations first
        Migrator::up(&db, None).await.expect("Migrations failed.");
        Ok(db)
    }

    #[tokio::test]
    async fn test_entity_integration() -> Result<(), DbErr> {
        // Setup database
        let db = setup_db().await?;

        // Create users
        let alice = user::ActiveModel {
            username: Set("alice".to_string()),
            password_hash: Set("$argon2id$stub-hash-alice".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let bob = user::ActiveModel {
            username: Set("bob".to_string()),
            password_hash: Set("$argon2id$stub-hash-bob".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Create lunches
        let soup = lunch::ActiveModel {
            name: Set("Tomato soup".to_string()),
            description: Set(Some("With basil and croutons".to_string())),
            price: Set(Decimal::new(450, 2)), // 4.50
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let curry = lunch::ActiveModel {
            name: Set("Green curry".to_string()),
            description: Set(None),
            price: Set(Decimal::new(899, 2)), // 8.99
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Create orders for both users
        let first_order = order::ActiveModel {
            lunch_id: Set(soup.id),
            user_id: Set(alice.id),
            timestamp: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let second_order = order::ActiveModel {
            lunch_id: Set(curry.id),
            user_id: Set(bob.id),
            timestamp: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Create meals owned by alice only
        let breakfast = meal::ActiveModel {
            name: Set("Porridge".to_string()),
            description: Set(Some("Oats with honey".to_string())),
            user_id: Set(alice.id),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        meal::ActiveModel {
            name: Set("Late snack".to_string()),
            description: Set(None),
            user_id: Set(alice.id),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Create a session for alice
        let session_row = session::ActiveModel {
            token_hash: Set("deadbeef".to_string()),
            user_id: Set(alice.id),
            created_at: Set(Utc::now()),
            expires_at: Set(Utc::now() + chrono::Duration::days(7)),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Read back and verify data

        // Verify users
        let users = User::find().all(&db).await?;
        assert_eq!(users.len(), 2);
        assert!(users.iter().any(|u| u.username == "alice"));
        assert!(users.iter().any(|u| u.username == "bob"));

        // Verify lunches
        let lunches = Lunch::find().all(&db).await?;
        assert_eq!(lunches.len(), 2);
        assert!(lunches.iter().any(|l| l.name == "Tomato soup"));
        assert!(lunches.iter().any(|l| l.price == Decimal::new(899, 2)));

        // Verify orders
        let orders = Order::find().all(&db).await?;
        assert_eq!(orders.len(), 2);
        assert!(orders.iter().any(|o| o.id == first_order.id && o.lunch_id == soup.id));
        assert!(orders.iter().any(|o| o.id == second_order.id && o.user_id == bob.id));

        // Verify meals are scoped per user
        let alice_meals = Meal::find()
            .filter(meal::Column::UserId.eq(alice.id))
            .all(&db)
            .await?;
        assert_eq!(alice_meals.len(), 2);
        assert!(alice_meals.iter().any(|m| m.id == breakfast.id));

        let bob_meals = Meal::find()
            .filter(meal::Column::UserId.eq(bob.id))
            .all(&db)
            .await?;
        assert!(bob_meals.is_empty());

        // Verify sessions
        let sessions = Session::find()
            .filter(session::Column::TokenHash.eq("deadbeef"))
            .all(&db)
            .await?;
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].id, session_row.id);
        assert_eq!(sessions[0].user_id, alice.id);

        // Orders sorted newest first, the way the history view reads them
        let newest_first = Order::find()
            .order_by_desc(order::Column::Timestamp)
            .all(&db)
            .await?;
        assert_eq!(newest_first.len(), 2);
        assert!(newest_first[0].timestamp >= newest_first[1].timestamp);

        Ok(())
    }
}
