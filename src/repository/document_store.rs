use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    repository::{field_path, Document, DocumentStore, Fields, ListQuery, SortDirection},
};

#[derive(FromRow)]
struct DocumentRow {
    id: String,
    data: String,
}

/// Document collections kept as JSON objects in a single SQLite table.
pub struct SqliteDocumentStore {
    pool: SqlitePool,
}

impl SqliteDocumentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_document(row: DocumentRow) -> Result<Document> {
        let fields: Fields = serde_json::from_str(&row.data)
            .map_err(|e| AppError::Database(format!("Corrupt document {}: {}", row.id, e)))?;
        Ok(Document { id: row.id, fields })
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn insert(&self, collection: &str, fields: Fields) -> Result<String> {
        let id = Uuid::new_v4().simple().to_string();
        let data = serde_json::to_string(&fields)?;

        sqlx::query(
            r#"
            INSERT INTO documents (collection, id, data)
            VALUES (?, ?, ?)
            "#
        )
        .bind(collection)
        .bind(&id)
        .bind(&data)
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let row = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, data FROM documents WHERE collection = ? AND id = ?"
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_document).transpose()
    }

    async fn list(&self, collection: &str, query: &ListQuery) -> Result<Vec<Document>> {
        let order_path = field_path(&query.order_by)?;
        // Ties fall back to insertion order, in the same direction.
        let direction = match query.direction {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        };

        let rows = match &query.filter {
            Some((field, value)) => {
                let filter_path = field_path(field)?;
                let sql = format!(
                    r#"
                    SELECT id, data FROM documents
                    WHERE collection = ? AND json_extract(data, ?) = ?
                    ORDER BY json_extract(data, ?) {direction}, seq {direction}
                    "#
                );
                sqlx::query_as::<_, DocumentRow>(&sql)
                    .bind(collection)
                    .bind(filter_path)
                    .bind(value)
                    .bind(order_path)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let sql = format!(
                    r#"
                    SELECT id, data FROM documents
                    WHERE collection = ?
                    ORDER BY json_extract(data, ?) {direction}, seq {direction}
                    "#
                );
                sqlx::query_as::<_, DocumentRow>(&sql)
                    .bind(collection)
                    .bind(order_path)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        rows.into_iter()
            .map(Self::row_to_document)
            .collect()
    }

    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<()> {
        let patch = serde_json::to_string(&fields)?;

        // json_patch merges top-level keys; a null value removes the key.
        let result = sqlx::query(
            r#"
            UPDATE documents
            SET data = json_patch(data, ?)
            WHERE collection = ? AND id = ?
            "#
        )
        .bind(&patch)
        .bind(collection)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("No document {} in {}", id, collection)));
        }

        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        sqlx::query("DELETE FROM documents WHERE collection = ? AND id = ?")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
