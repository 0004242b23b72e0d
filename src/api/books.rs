//! Books API endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::book::{Book, CategorizedBooks, NewBook},
};

/// Add a book to the reading list
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = NewBook,
    responses(
        (status = 200, description = "Book created", body = Book),
        (status = 422, description = "Missing field or unknown status")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(data): Json<NewBook>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.create(&data).await?;
    Ok(Json(book))
}

/// List all books grouped by reading status
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Books by status", body = CategorizedBooks)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
) -> AppResult<Json<CategorizedBooks>> {
    let books = state.services.books.list_categorized().await?;
    Ok(Json(books))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_by_id(id).await?;
    Ok(Json(book))
}

/// Replace title and status of a book; the body carries the ID
#[utoipa::path(
    put,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Json(book): Json<Book>,
) -> AppResult<Json<Book>> {
    let id = book.id;
    let book = state.services.books.update(id, &NewBook::from(book)).await?;
    Ok(Json(book))
}

/// Delete a book, returning the deleted record
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.delete(id).await?;
    Ok(Json(book))
}
