//! Books repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::BookStore;
use crate::{
    error::AppResult,
    models::book::{Book, NewBook},
};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS books (
        id SERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        status TEXT NOT NULL
            CHECK (status IN ('to_be_read', 'in_progress', 'completed'))
    )
"#;

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn ensure_schema(&self) -> AppResult<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn create(&self, book: &NewBook) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            "INSERT INTO books (title, status) VALUES ($1, $2) RETURNING id, title, status",
        )
        .bind(&book.title)
        .bind(book.status.as_str())
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = row.id, status = %row.status, "book created");
        Ok(row)
    }

    async fn list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT id, title, status FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>("SELECT id, title, status FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, book: &NewBook) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books SET title = $1, status = $2
            WHERE id = $3
            RETURNING id, title, status
            "#,
        )
        .bind(&book.title)
        .bind(book.status.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        if row.is_some() {
            tracing::debug!(id, status = %book.status, "book updated");
        }
        Ok(row)
    }

    async fn delete(&self, id: i32) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>(
            "DELETE FROM books WHERE id = $1 RETURNING id, title, status",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        if row.is_some() {
            tracing::debug!(id, "book deleted");
        }
        Ok(row)
    }
}
