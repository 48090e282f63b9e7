#[cfg(feature = "sqlite")]
use sqlx_core::from_row::FromRow;
#[cfg(feature = "sqlite")]
use sqlx_core::row::Row;
#[cfg(feature = "sqlite")]
use sqlx_sqlite::SqliteRow;

#[cfg(feature = "sqlite")]
use super::Item;

#[cfg(feature = "sqlite")]
impl FromRow<'_, SqliteRow> for Item {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx_core::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            brand: row.try_get("brand")?,
            price: row.try_get("price")?,
        })
    }
}
