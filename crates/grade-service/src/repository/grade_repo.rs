//! 成绩账本仓储
//!
//! 学生成绩行的数据访问。所有权检查折叠进更新语句的 WHERE 谓词，
//! 不做「先查再改」，避免检查与使用之间的时间窗口。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::traits::GradeRepositoryTrait;
use crate::error::{GradeError, Result};
use crate::models::{GradeRecord, GradeUpdate, Module, NewGradeRecord, StudentGrade};

/// 成绩账本仓储
pub struct GradeRepository {
    pool: PgPool,
}

impl GradeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// 成绩行与模块 join 的扁平查询结果
#[derive(sqlx::FromRow)]
struct GradeWithModuleRow {
    id: i64,
    student_id: String,
    module_id: i64,
    grade: Option<String>,
    grade_point: f64,
    is_completed: bool,
    is_repeat: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    m_id: i64,
    m_degree_id: i64,
    m_code: Option<String>,
    m_name: String,
    m_credits: i32,
    m_semester: i32,
    m_year: i32,
    m_category: String,
    m_is_gpa: bool,
}

impl From<GradeWithModuleRow> for StudentGrade {
    fn from(row: GradeWithModuleRow) -> Self {
        Self {
            record: GradeRecord {
                id: row.id,
                student_id: row.student_id,
                module_id: row.module_id,
                grade: row.grade,
                grade_point: row.grade_point,
                is_completed: row.is_completed,
                is_repeat: row.is_repeat,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            module: Module {
                id: row.m_id,
                degree_id: row.m_degree_id,
                code: row.m_code,
                name: row.m_name,
                credits: row.m_credits,
                semester: row.m_semester,
                year: row.m_year,
                category: row.m_category,
                is_gpa: row.m_is_gpa,
            },
        }
    }
}

#[async_trait]
impl GradeRepositoryTrait for GradeRepository {
    /// 查询学生的全部成绩（含关联模块）
    ///
    /// 排序反映学业进度：学年、学期升序；同学年同学期按记录 ID 升序，
    /// 保证排序对并列情况也是确定的。
    async fn list_student_grades(&self, student_id: &str) -> Result<Vec<StudentGrade>> {
        let rows = sqlx::query_as::<_, GradeWithModuleRow>(
            r#"
            SELECT sg.id, sg.student_id, sg.module_id, sg.grade, sg.grade_point,
                   sg.is_completed, sg.is_repeat, sg.created_at, sg.updated_at,
                   m.id AS m_id, m.degree_id AS m_degree_id, m.code AS m_code,
                   m.name AS m_name, m.credits AS m_credits, m.semester AS m_semester,
                   m.year AS m_year, m.category AS m_category, m.is_gpa AS m_is_gpa
            FROM student_grades sg
            JOIN modules m ON m.id = sg.module_id
            WHERE sg.student_id = $1
            ORDER BY m.year ASC, m.semester ASC, sg.id ASC
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(StudentGrade::from).collect())
    }

    /// 学生在某学位下是否已有成绩行
    async fn has_grades_for_degree(&self, student_id: &str, degree_id: i64) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM student_grades sg
                JOIN modules m ON m.id = sg.module_id
                WHERE sg.student_id = $1 AND m.degree_id = $2
            )
            "#,
        )
        .bind(student_id)
        .bind(degree_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// 单条语句批量插入成绩行
    ///
    /// student_grades 上的 UNIQUE (student_id, module_id) 约束兜底：
    /// 并发双重播种绕过预检时，唯一约束冲突映射为 AlreadyInitialized。
    async fn insert_grades(&self, records: &[NewGradeRecord]) -> Result<u64> {
        if records.is_empty() {
            return Ok(0);
        }

        let mut builder = sqlx::QueryBuilder::<sqlx::Postgres>::new(
            "INSERT INTO student_grades \
             (student_id, module_id, grade, grade_point, is_completed, is_repeat) ",
        );
        builder.push_values(records, |mut b, record| {
            b.push_bind(&record.student_id)
                .push_bind(record.module_id)
                .push_bind(&record.grade)
                .push_bind(record.grade_point)
                .push_bind(record.is_completed)
                .push_bind(record.is_repeat);
        });

        let result = builder.build().execute(&self.pool).await.map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return GradeError::AlreadyInitialized;
                }
            }
            GradeError::Storage(e)
        })?;

        Ok(result.rows_affected())
    }

    /// 条件更新成绩行
    ///
    /// WHERE 谓词同时匹配 id 和 student_id：学生即使猜中他人的
    /// grade_id 也无法改动他人记录。四个字段整体覆盖。
    async fn update_grade(
        &self,
        grade_id: i64,
        student_id: &str,
        update: &GradeUpdate,
    ) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE student_grades
            SET grade = $1, grade_point = $2, is_completed = $3, is_repeat = $4,
                updated_at = NOW()
            WHERE id = $5 AND student_id = $6
            "#,
        )
        .bind(&update.grade)
        .bind(update.grade_point)
        .bind(update.is_completed)
        .bind(update.is_repeat)
        .bind(grade_id)
        .bind(student_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
