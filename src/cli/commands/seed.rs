use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use model::entities::lunch;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, Database, EntityTrait, PaginatorTrait, Set};
use tracing::{info, warn};

/// Insert a handful of sample lunches so a fresh deployment has a catalog.
///
/// Skips seeding when the catalog already has rows; running it twice does
/// not duplicate the menu.
pub async fn seed_lunches(database_url: &str) -> Result<()> {
    info!("Seeding lunch catalog");

    let db = Database::connect(database_url).await?;
    Migrator::up(&db, None).await?;

    let existing = lunch::Entity::find().count(&db).await?;
    if existing > 0 {
        warn!("Lunch catalog already has {} entries, skipping seed", existing);
        return Ok(());
    }

    let samples = [
        ("Tomato soup", Some("With basil and croutons"), Decimal::new(450, 2)),
        ("Green curry", Some("Medium spicy, with jasmine rice"), Decimal::new(899, 2)),
        ("Caesar salad", None, Decimal::new(725, 2)),
        ("Daily special", Some("Ask the kitchen"), Decimal::new(650, 2)),
    ];

    for (name, description, price) in samples {
        let created = lunch::ActiveModel {
            name: Set(name.to_string()),
            description: Set(description.map(str::to_string)),
            price: Set(price),
            ..Default::default()
        }
        .insert(&db)
        .await?;
        info!("Seeded lunch {}: {}", created.id, created.name);
    }

    info!("Lunch catalog seeded successfully");
    Ok(())
}
