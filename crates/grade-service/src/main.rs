//! 学业成绩服务入口
//!
//! 提供课程目录查询与学生成绩单的播种、查询、更新 REST API。

use std::sync::Arc;

use axum::{Json, Router, middleware, routing::get};
use grade_service::{AuthClient, middleware::auth_middleware, routes, state::AppState};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use unistat_shared::{
    config::AppConfig,
    database::Database,
    observability::{self, middleware as obs_middleware},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 统一加载配置：从 config/{service_name}.toml 加载
    let config = AppConfig::load("grade-service").unwrap_or_default();

    let obs_config = config
        .observability
        .clone()
        .with_service_name(&config.service_name);
    observability::init(&obs_config)?;

    info!("Starting grade-service on {}", config.server_addr());

    // 初始化基础设施
    let db = Database::connect(&config.database).await?;

    info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(db.pool()).await?;

    // 令牌校验委托给外部认证服务
    let verifier = Arc::new(AuthClient::new(&config.auth)?);

    let state = AppState::new(db.pool().clone(), verifier);

    // CORS 全开：所有写路由都要求已验证身份，目录路由是公开只读数据
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::api_routes())
        .route("/", get(root))
        .route("/health", get(health_check))
        .route(
            "/ready",
            get({
                let db_for_ready = db;
                move || readiness_check(db_for_ready.clone())
            }),
        )
        // 认证中间件：校验 Bearer 令牌并注入学生身份
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        // CORS 必须在认证外层：预检 OPTIONS 不携带 Authorization，
        // 要在到达认证中间件之前由 CorsLayer 应答
        .layer(cors)
        // 可观测性中间件：请求追踪和请求 ID
        .layer(middleware::from_fn(obs_middleware::http_tracing))
        .layer(middleware::from_fn(obs_middleware::request_id))
        .with_state(state);

    let listener = TcpListener::bind(config.server_addr()).await?;
    info!("Listening on {}", config.server_addr());

    // 优雅关闭：收到 SIGTERM 或 Ctrl+C 时停止接收新连接，
    // 等待已有请求处理完毕
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// 根路由：存活消息
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "UniStat backend is live"
    }))
}

/// 监听关闭信号
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("注册 Ctrl+C 处理器失败");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("注册 SIGTERM 处理器失败")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown..."),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown..."),
    }
}

/// 存活探针：服务进程正常即返回 ok
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "grade-service"
    }))
}

/// 就绪探针：检查数据库连接是否可用
async fn readiness_check(db: Database) -> Json<serde_json::Value> {
    let db_ok = db.health_check().await.is_ok();

    Json(serde_json::json!({
        "status": if db_ok { "ok" } else { "degraded" },
        "service": "grade-service",
        "checks": {
            "database": if db_ok { "ok" } else { "fail" }
        }
    }))
}
