//! Roster - 用户名册 HTTP API
//!
//! 组装：配置 -> 日志 -> 内存存储 -> HTTP 服务器

use roster::config::{load_config, print_config, LogConfig};
use roster::infrastructure::http::{AppState, HttpServer, ServerConfig};
use roster::infrastructure::memory::InMemoryDocumentStore;

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},roster={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Roster - user roster API");
    print_config(&config);

    // 创建内存存储
    let store = if config.store.seed {
        InMemoryDocumentStore::with_demo_users()
    } else {
        InMemoryDocumentStore::with_users()
    };

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(store.arc());
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
