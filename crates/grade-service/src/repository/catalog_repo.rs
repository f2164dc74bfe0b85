//! 课程目录仓储
//!
//! 学位与模块的只读数据访问

use async_trait::async_trait;
use sqlx::PgPool;

use super::traits::CatalogRepositoryTrait;
use crate::error::Result;
use crate::models::{Degree, Module};

/// 课程目录仓储
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepositoryTrait for CatalogRepository {
    /// 列出全部学位
    async fn list_degrees(&self) -> Result<Vec<Degree>> {
        let degrees = sqlx::query_as::<_, Degree>(
            r#"
            SELECT id, name, duration_years, total_credits
            FROM degrees
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(degrees)
    }

    /// 列出某学位的全部模块（课程体系）
    async fn list_modules_by_degree(&self, degree_id: i64) -> Result<Vec<Module>> {
        let modules = sqlx::query_as::<_, Module>(
            r#"
            SELECT id, degree_id, code, name, credits, semester, year, category, is_gpa
            FROM modules
            WHERE degree_id = $1
            ORDER BY year ASC, semester ASC, id ASC
            "#,
        )
        .bind(degree_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(modules)
    }
}
