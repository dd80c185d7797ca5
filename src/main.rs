//! In-N-Out-Books - 图书目录 Web 服务

use std::sync::Arc;

use in_n_out_books::config::{load_config, print_config, LogConfig};
use in_n_out_books::domain::seed_catalog;
use in_n_out_books::infrastructure::http::{AppState, HttpServer, ServerConfig};
use in_n_out_books::infrastructure::memory::InMemoryBookRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("In-N-Out-Books - 图书目录服务");
    print_config(&config);

    // 创建图书存储
    let book_repo = if config.catalog.seed {
        let books = seed_catalog();
        tracing::info!(count = books.len(), "Seed catalog loaded");
        InMemoryBookRepository::with_books(books)
    } else {
        InMemoryBookRepository::new()
    };

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_expose_errors(config.diagnostics.expose_errors);
    let state = AppState::new(Arc::new(book_repo));

    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志，RUST_LOG 优先于配置文件中的级别
fn init_tracing(log: &LogConfig) {
    let log_filter = format!(
        "{},in_n_out_books={},tower_http=debug",
        log.level, log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
