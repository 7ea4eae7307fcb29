//! Database queries for the room catalog

use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::Room;

/// Get all rooms in insertion order.
///
/// Quote ordering follows this ordering, so keep it stable.
pub async fn get_rooms(pool: &SqlitePool) -> Result<Vec<Room>> {
    let rooms = sqlx::query_as::<_, Room>(
        r#"
        SELECT id, name, image, capacity, price_weekday, price_weekend, description
        FROM rooms
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rooms)
}

/// Count rooms in the catalog
pub async fn count_rooms(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rooms")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

/// Create the catalog schema if it does not exist yet
pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS rooms (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            image TEXT NOT NULL DEFAULT 'default.jpg',
            capacity INTEGER NOT NULL CHECK (capacity >= 1),
            price_weekday INTEGER NOT NULL CHECK (price_weekday >= 0),
            price_weekend INTEGER NOT NULL CHECK (price_weekend >= 0),
            description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

struct SeedRoom {
    name: &'static str,
    image: &'static str,
    capacity: i64,
    price_weekday: i64,
    price_weekend: i64,
    description: &'static str,
}

const SEED_ROOMS: [SeedRoom; 3] = [
    SeedRoom {
        name: "Deluxe Garden Room",
        image: "deluxe_garden.jpg",
        capacity: 2,
        price_weekday: 1600,
        price_weekend: 2200,
        description: "Perfect for couples. Garden view with strong privacy.",
    },
    SeedRoom {
        name: "Premium Room (Valley View)",
        image: "premium_valley.jpg",
        capacity: 2,
        price_weekday: 2000,
        price_weekend: 2600,
        description: "Breathtaking valley views. Our most popular choice.",
    },
    SeedRoom {
        name: "Family Suite (4 Pax)",
        image: "family_suite.jpg",
        capacity: 4,
        price_weekday: 3000,
        price_weekend: 3500,
        description: "Spacious setup for families or groups of friends.",
    },
];

/// Seed the catalog with the launch rooms.
///
/// Idempotent: returns `false` without writing when the catalog already
/// has rooms, `true` after inserting the seed set.
pub async fn seed_rooms(pool: &SqlitePool) -> Result<bool> {
    if count_rooms(pool).await? > 0 {
        return Ok(false);
    }

    for room in &SEED_ROOMS {
        sqlx::query(
            r#"
            INSERT INTO rooms (name, image, capacity, price_weekday, price_weekend, description)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(room.name)
        .bind(room.image)
        .bind(room.capacity)
        .bind(room.price_weekday)
        .bind(room.price_weekend)
        .bind(room.description)
        .execute(pool)
        .await?;
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    // Single connection so the in-memory database is shared across queries
    async fn test_pool() -> SqlitePool {
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_empty_catalog_reads_as_empty() {
        let pool = test_pool().await;
        create_schema(&pool).await.unwrap();

        assert_eq!(count_rooms(&pool).await.unwrap(), 0);
        assert!(get_rooms(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_seed_populates_catalog_in_insertion_order() {
        let pool = test_pool().await;
        create_schema(&pool).await.unwrap();

        assert!(seed_rooms(&pool).await.unwrap());

        let rooms = get_rooms(&pool).await.unwrap();
        assert_eq!(rooms.len(), 3);
        assert_eq!(rooms[0].name, "Deluxe Garden Room");
        assert_eq!(rooms[0].price_weekday, 1600);
        assert_eq!(rooms[0].price_weekend, 2200);
        assert_eq!(rooms[2].name, "Family Suite (4 Pax)");
        assert_eq!(rooms[2].capacity, 4);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let pool = test_pool().await;
        create_schema(&pool).await.unwrap();

        assert!(seed_rooms(&pool).await.unwrap());
        assert!(!seed_rooms(&pool).await.unwrap());
        assert_eq!(count_rooms(&pool).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_schema_creation_is_idempotent() {
        let pool = test_pool().await;
        create_schema(&pool).await.unwrap();
        create_schema(&pool).await.unwrap();
        assert_eq!(count_rooms(&pool).await.unwrap(), 0);
    }
}
