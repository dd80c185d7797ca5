//! Book Context - Seed Catalog

use super::{Book, BookId, Title};

const SEED: &[(u64, &str, &str)] = &[
    (1, "The Fellowship of the Ring", "J.R.R. Tolkien"),
    (2, "Harry Potter and the Philosopher's Stone", "J.K. Rowling"),
    (3, "The Two Towers", "J.R.R. Tolkien"),
    (4, "The Return of the King", "J.R.R. Tolkien"),
    (5, "The Hobbit", "J.R.R. Tolkien"),
];

/// 启动时加载、测试间重置使用的基准目录
pub fn seed_catalog() -> Vec<Book> {
    let books: Vec<Book> = SEED
        .iter()
        .filter_map(|(id, title, author)| {
            Title::new(*title)
                .ok()
                .map(|title| Book::new(BookId::new(*id), title).with_author(*author))
        })
        .collect();

    debug_assert_eq!(books.len(), SEED.len(), "every seed entry must have a valid title");
    books
}
