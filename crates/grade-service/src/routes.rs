//! 路由配置模块
//!
//! 定义所有 REST API 端点的路由映射

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::{handlers, state::AppState};

/// 课程目录路由（公开，无需认证）
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/degrees", get(handlers::degree::list_degrees))
        .route(
            "/degrees/{degree_id}/modules",
            get(handlers::degree::list_degree_modules),
        )
}

/// 成绩路由（需要认证）
pub fn grade_routes() -> Router<AppState> {
    Router::new()
        .route("/grades", get(handlers::grade::list_my_grades))
        .route(
            "/grades/init/{degree_id}",
            post(handlers::grade::initialize_grades),
        )
        .route("/grades/{grade_id}", put(handlers::grade::update_grade))
}

/// 合并业务路由
pub fn api_routes() -> Router<AppState> {
    catalog_routes().merge(grade_routes())
}
