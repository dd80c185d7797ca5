//! In-N-Out-Books - 图书目录 Web 服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Book Context: 图书实体、书号与标题值对象、种子目录
//! - collection: 无状态集合访问器（find / find_one / add / delete）
//!
//! 应用层 (application/):
//! - Ports: BookRepositoryPort
//! - Commands: AddBook, DeleteBook
//! - Queries: ListBooks, GetBook
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 首页 + RESTful API
//! - Memory: 内存图书存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
