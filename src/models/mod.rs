//! Data models for Readlist

pub mod book;

pub use book::{Book, CategorizedBooks, NewBook, ReadingStatus};
