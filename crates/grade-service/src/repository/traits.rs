//! 仓储 Trait 定义
//!
//! 定义仓储接口，便于服务层依赖抽象而非具体实现，支持 mock 测试

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Degree, GradeUpdate, Module, NewGradeRecord, StudentGrade};

/// 课程目录仓储接口
///
/// 学位与模块是只读参考数据，接口只提供查询
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepositoryTrait: Send + Sync {
    async fn list_degrees(&self) -> Result<Vec<Degree>>;
    async fn list_modules_by_degree(&self, degree_id: i64) -> Result<Vec<Module>>;
}

/// 成绩账本仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GradeRepositoryTrait: Send + Sync {
    /// 查询学生的全部成绩（含关联模块），按学业进度排序
    async fn list_student_grades(&self, student_id: &str) -> Result<Vec<StudentGrade>>;

    /// 学生在某学位下是否已有成绩行（播种幂等性预检）
    async fn has_grades_for_degree(&self, student_id: &str, degree_id: i64) -> Result<bool>;

    /// 单条语句批量插入成绩行，返回插入行数
    async fn insert_grades(&self, records: &[NewGradeRecord]) -> Result<u64>;

    /// 条件更新：WHERE id = grade_id AND student_id = student_id，
    /// 返回受影响行数（0 表示记录不存在或不属于该学生）
    async fn update_grade(
        &self,
        grade_id: i64,
        student_id: &str,
        update: &GradeUpdate,
    ) -> Result<u64>;
}
