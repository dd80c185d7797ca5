//! HTTP Handlers

mod book;
mod page;
mod ping;

pub use book::*;
pub use page::*;
pub use ping::*;
