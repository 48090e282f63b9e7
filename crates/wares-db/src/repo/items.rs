use super::prelude::*;
use tracing::{instrument, Span};

pub struct ItemRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ItemRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    #[instrument(
        level = "debug",
        skip(self, name, description),
        fields(
            brand = %brand,
            db.system = "sqlite",
            db.operation = "INSERT",
            db.query = "items.create"
        )
    )]
    pub async fn create(
        &self,
        name: &str,
        description: &str,
        brand: &str,
        price: f64,
    ) -> Result<i64, sqlx_core::Error> {
        query!(
            r#"
            INSERT INTO items (name, description, brand, price)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            name,
            description,
            brand,
            price
        )
        .execute(self.pool)
        .await
        .map(|result| {
            Span::current().record("db.rows", result.rows_affected() as i64);
            result.last_insert_rowid()
        })
    }

    #[instrument(
        level = "debug",
        skip(self),
        fields(item_id = %id, db.system = "sqlite", db.operation = "SELECT", db.query = "items.get_by_id")
    )]
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Item>, sqlx_core::Error> {
        query_as!(
            Item,
            r#"
            SELECT id, name, description, brand, price
            FROM items
            WHERE id = ?1
            "#,
            id
        )
        .fetch_optional(self.pool)
        .await
    }

    #[instrument(
        level = "debug",
        skip(self, name, description),
        fields(item_id = %id, db.system = "sqlite", db.operation = "UPDATE", db.query = "items.update_details")
    )]
    pub async fn update_details(
        &self,
        id: i64,
        name: &str,
        description: &str,
    ) -> Result<u64, sqlx_core::Error> {
        query!(
            r#"
            UPDATE items
            SET name = ?2,
                description = ?3
            WHERE id = ?1
            "#,
            id,
            name,
            description
        )
        .execute(self.pool)
        .await
        .map(|result| {
            let rows = result.rows_affected();
            Span::current().record("db.rows", rows as i64);
            rows
        })
    }

    #[instrument(
        level = "debug",
        skip(self),
        fields(item_id = %id, db.system = "sqlite", db.operation = "DELETE", db.query = "items.delete_by_id")
    )]
    pub async fn delete_by_id(&self, id: i64) -> Result<u64, sqlx_core::Error> {
        query!(r#"DELETE FROM items WHERE id = ?1"#, id)
            .execute(self.pool)
            .await
            .map(|result| {
                let rows = result.rows_affected();
                Span::current().record("db.rows", rows as i64);
                rows
            })
    }

    #[instrument(
        level = "debug",
        skip(self),
        fields(brand = %brand, db.system = "sqlite", db.operation = "SELECT", db.query = "items.list_by_brand")
    )]
    pub async fn list_by_brand(&self, brand: &str) -> Result<Vec<Item>, sqlx_core::Error> {
        query_as!(
            Item,
            r#"
            SELECT id, name, description, brand, price
            FROM items
            WHERE brand = ?1
            ORDER BY id
            "#,
            brand
        )
        .fetch_all(self.pool)
        .await
    }

    // SUM over zero rows comes back as a single NULL row, hence Option.
    #[instrument(
        level = "debug",
        skip(self),
        fields(brand = %brand, db.system = "sqlite", db.operation = "SELECT", db.query = "items.total_price_by_brand")
    )]
    pub async fn total_price_by_brand(&self, brand: &str) -> Result<Option<f64>, sqlx_core::Error> {
        query_scalar!(
            Option<f64>,
            r#"SELECT SUM(price) FROM items WHERE brand = ?1"#,
            brand
        )
        .fetch_one(self.pool)
        .await
    }
}
