//! 成绩服务
//!
//! 核心业务逻辑：课程目录查询、成绩播种、成绩查询与更新。
//! 身份（student_id）由认证中间件解析后传入，所有操作都以它为作用域；
//! 服务自身不持有长期状态，仓储通过构造注入。

use std::sync::Arc;

use tracing::{info, instrument};

use crate::error::{GradeError, Result};
use crate::models::{Degree, GradeUpdate, Module, NewGradeRecord, StudentGrade};
use crate::repository::{CatalogRepositoryTrait, GradeRepositoryTrait};

/// 成绩服务
pub struct GradeService<C, G>
where
    C: CatalogRepositoryTrait,
    G: GradeRepositoryTrait,
{
    catalog: Arc<C>,
    grades: Arc<G>,
}

impl<C, G> GradeService<C, G>
where
    C: CatalogRepositoryTrait,
    G: GradeRepositoryTrait,
{
    pub fn new(catalog: Arc<C>, grades: Arc<G>) -> Self {
        Self { catalog, grades }
    }

    /// 列出全部学位
    ///
    /// 参考数据查询为空视为 NotFound，而非空列表
    pub async fn list_degrees(&self) -> Result<Vec<Degree>> {
        let degrees = self.catalog.list_degrees().await?;
        if degrees.is_empty() {
            return Err(GradeError::NotFound("没有可用的学位".to_string()));
        }
        Ok(degrees)
    }

    /// 列出某学位的课程体系
    pub async fn list_degree_modules(&self, degree_id: i64) -> Result<Vec<Module>> {
        let modules = self.catalog.list_modules_by_degree(degree_id).await?;
        if modules.is_empty() {
            return Err(GradeError::NotFound(format!(
                "学位 {} 下没有模块",
                degree_id
            )));
        }
        Ok(modules)
    }

    /// 查询学生的全部成绩（含关联模块，按学年、学期排序）
    ///
    /// 未播种的学生返回空列表，不是错误
    #[instrument(skip(self))]
    pub async fn student_grades(&self, student_id: &str) -> Result<Vec<StudentGrade>> {
        self.grades.list_student_grades(student_id).await
    }

    /// 初始化（播种）学生成绩单
    ///
    /// 把所选学位的全部模块复制为该学生的成绩行，初始未评分。
    /// 重复播种是错误（AlreadyInitialized）：预检已有成绩行，
    /// 并发竞争下由存储层唯一约束兜底。
    #[instrument(skip(self))]
    pub async fn initialize_grades(&self, student_id: &str, degree_id: i64) -> Result<u64> {
        let modules = self.catalog.list_modules_by_degree(degree_id).await?;
        if modules.is_empty() {
            return Err(GradeError::DegreeHasNoModules(degree_id));
        }

        if self
            .grades
            .has_grades_for_degree(student_id, degree_id)
            .await?
        {
            return Err(GradeError::AlreadyInitialized);
        }

        let records: Vec<NewGradeRecord> = modules
            .iter()
            .map(|module| NewGradeRecord::seeded(student_id, module.id))
            .collect();

        let inserted = self.grades.insert_grades(&records).await?;

        info!(
            student_id = %student_id,
            degree_id,
            inserted,
            "Student grade sheet initialized"
        );

        Ok(inserted)
    }

    /// 更新一条成绩行
    ///
    /// 所有权谓词在存储查询里强制执行；零行受影响统一报
    /// UpdateRejected，不区分「不存在」和「不属于当前学生」。
    #[instrument(skip(self, update))]
    pub async fn update_grade(
        &self,
        student_id: &str,
        grade_id: i64,
        update: GradeUpdate,
    ) -> Result<()> {
        let affected = self
            .grades
            .update_grade(grade_id, student_id, &update)
            .await?;

        if affected == 0 {
            return Err(GradeError::UpdateRejected);
        }

        info!(student_id = %student_id, grade_id, "Grade updated");

        Ok(())
    }
}
