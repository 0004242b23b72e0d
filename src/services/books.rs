//! Books service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CategorizedBooks, NewBook},
    repository::BookStore,
};

#[derive(Clone)]
pub struct BooksService {
    store: Arc<dyn BookStore>,
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Book {} not found", id))
}

impl BooksService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, data: &NewBook) -> AppResult<Book> {
        self.store.create(data).await
    }

    /// All books, grouped by reading status
    pub async fn list_categorized(&self) -> AppResult<CategorizedBooks> {
        let books = self.store.list().await?;
        Ok(CategorizedBooks::from_books(books))
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.store.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    pub async fn update(&self, id: i32, data: &NewBook) -> AppResult<Book> {
        self.store.update(id, data).await?.ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> AppResult<Book> {
        self.store.delete(id).await?.ok_or_else(|| not_found(id))
    }

    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }
}
