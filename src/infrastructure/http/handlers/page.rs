//! Page Handlers
//!
//! 首页与 404 页面（HTML）

use axum::{http::StatusCode, response::Html};

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>In-N-Out-Books</title>
    <style>
      body {
        font-family: Arial, sans-serif;
        background: #f5f5f5;
        margin: 0;
        text-align: center;
      }
      header {
        background: #4a148c;
        color: white;
        padding: 20px;
      }
      main {
        margin-top: 40px;
      }
      a.button {
        display: inline-block;
        padding: 12px 20px;
        background: #6a1b9a;
        color: white;
        text-decoration: none;
        border-radius: 6px;
      }
      a.button:hover {
        background: #4a148c;
      }
    </style>
  </head>
  <body>
    <header>
      <h1>In-N-Out-Books</h1>
      <p>Your personal book collection manager</p>
    </header>
    <main>
      <h2>Welcome!</h2>
      <p>Track books you have read, want to read, or plan to share.</p>
      <a class="button" href="/api/books">Browse the catalog</a>
    </main>
  </body>
</html>
"#;

const NOT_FOUND_PAGE: &str = "<h1>404 - Page Not Found</h1>";

/// 首页
pub async fn landing_page() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// 未匹配路由的兜底处理
pub async fn not_found() -> (StatusCode, Html<&'static str>) {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE))
}
