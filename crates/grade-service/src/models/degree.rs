//! 课程目录实体定义
//!
//! 学位与模块是只读参考数据：本服务只查询，从不修改。

use serde::{Deserialize, Serialize};

/// 学位
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Degree {
    pub id: i64,
    pub name: String,
    /// 学制年限
    pub duration_years: i32,
    /// 毕业总学分
    pub total_credits: i32,
}

/// 课程模块
///
/// 每个模块属于且仅属于一个学位
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: i64,
    pub degree_id: i64,
    /// 课程代码（如 "CS101"，可选）
    pub code: Option<String>,
    pub name: String,
    pub credits: i32,
    /// 开课学期
    pub semester: i32,
    /// 开课学年
    pub year: i32,
    /// 模块类别（如 core / elective）
    pub category: String,
    /// 是否计入 GPA（GPA 计算在本服务范围之外）
    pub is_gpa: bool,
}
