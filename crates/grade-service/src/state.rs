//! 应用状态定义
//!
//! 包含 Axum 路由共享的应用状态

use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::TokenVerifier;
use crate::repository::{CatalogRepository, GradeRepository};
use crate::service::GradeService;

/// Axum 应用共享状态
///
/// 连接池与令牌校验器显式注入，handler 之间通过 Arc 共享
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL 连接池
    pub pool: PgPool,
    /// 成绩服务
    pub grades: Arc<GradeService<CatalogRepository, GradeRepository>>,
    /// 令牌校验器
    pub verifier: Arc<dyn TokenVerifier>,
}

impl AppState {
    /// 创建应用状态，内部装配仓储与服务
    pub fn new(pool: PgPool, verifier: Arc<dyn TokenVerifier>) -> Self {
        let catalog = Arc::new(CatalogRepository::new(pool.clone()));
        let grade_repo = Arc::new(GradeRepository::new(pool.clone()));
        let grades = Arc::new(GradeService::new(catalog, grade_repo));

        Self {
            pool,
            grades,
            verifier,
        }
    }
}
