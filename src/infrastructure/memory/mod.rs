//! Memory Layer - In-Memory State Management
//!
//! 图书存储的内存实现，进程生命周期内有效

mod book_repository;

pub use book_repository::InMemoryBookRepository;
