//! 学生成绩实体定义
//!
//! 成绩记录是学生与模块之间的关联行，持有可变的成绩状态。
//! 不变量：同一学生对同一模块至多一行；行只能被其所属学生修改。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::degree::Module;

/// 学生成绩记录
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct GradeRecord {
    pub id: i64,
    /// 学生标识（来自认证服务的稳定不透明字符串）
    pub student_id: String,
    pub module_id: i64,
    /// 等级成绩（如 "A"），null 表示未评分
    pub grade: Option<String>,
    /// 绩点
    pub grade_point: f64,
    pub is_completed: bool,
    /// 是否重修
    pub is_repeat: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 待插入的成绩记录（播种用）
#[derive(Debug, Clone, PartialEq)]
pub struct NewGradeRecord {
    pub student_id: String,
    pub module_id: i64,
    pub grade: Option<String>,
    pub grade_point: f64,
    pub is_completed: bool,
    pub is_repeat: bool,
}

impl NewGradeRecord {
    /// 构造播种初始行：未评分、绩点 0.0、未完成、非重修
    pub fn seeded(student_id: &str, module_id: i64) -> Self {
        Self {
            student_id: student_id.to_string(),
            module_id,
            grade: None,
            grade_point: 0.0,
            is_completed: false,
            is_repeat: false,
        }
    }
}

/// 成绩更新字段
///
/// 整体覆盖语义：四个字段全部写入，不做部分更新。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradeUpdate {
    pub grade: Option<String>,
    pub grade_point: f64,
    pub is_completed: bool,
    pub is_repeat: bool,
}

/// 学生成绩（含关联模块）
///
/// 查询时由单条 join 查询组装，调用方无需二次往返。
#[derive(Debug, Clone)]
pub struct StudentGrade {
    pub record: GradeRecord,
    pub module: Module,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_record_defaults() {
        let record = NewGradeRecord::seeded("student-1", 42);
        assert_eq!(record.student_id, "student-1");
        assert_eq!(record.module_id, 42);
        assert_eq!(record.grade, None);
        assert_eq!(record.grade_point, 0.0);
        assert!(!record.is_completed);
        assert!(!record.is_repeat);
    }

    #[test]
    fn test_grade_update_default_is_ungraded() {
        let update = GradeUpdate::default();
        assert_eq!(update.grade, None);
        assert_eq!(update.grade_point, 0.0);
        assert!(!update.is_completed);
        assert!(!update.is_repeat);
    }
}
