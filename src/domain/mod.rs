//! Domain Layer - 领域层
//!
//! - Book Context: 图书目录
//! - collection: 通用的集合访问器

pub mod book;
pub mod collection;

pub use book::{seed_catalog, Book, BookError, BookId, Title};
