//! Book Context - 图书目录限界上下文
//!
//! 职责:
//! - Book 实体
//! - 书号与标题值对象
//! - 种子目录

mod entity;
mod errors;
mod seed;
mod value_objects;

pub use entity::Book;
pub use errors::BookError;
pub use seed::seed_catalog;
pub use value_objects::{BookId, Title};
