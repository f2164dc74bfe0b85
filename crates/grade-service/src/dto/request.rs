//! 请求 DTO 定义

use serde::Deserialize;
use validator::Validate;

use crate::models::GradeUpdate;

/// 成绩更新请求
///
/// 整体覆盖语义：载荷中省略的字段取 serde 默认值并照样写入，
/// 不做部分更新。这与存储层的全字段 UPDATE 保持一致。
#[derive(Debug, Clone, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateGradeRequest {
    /// 等级成绩（如 "A"、"B+"），null 表示清除评分
    #[validate(length(max = 8, message = "成绩字符串最长 8 个字符"))]
    pub grade: Option<String>,
    /// 绩点
    #[validate(range(min = 0.0, max = 10.0, message = "绩点必须在 0.0 到 10.0 之间"))]
    pub grade_point: f64,
    pub is_completed: bool,
    pub is_repeat: bool,
}

impl From<UpdateGradeRequest> for GradeUpdate {
    fn from(req: UpdateGradeRequest) -> Self {
        Self {
            grade: req.grade,
            grade_point: req.grade_point,
            is_completed: req.is_completed,
            is_repeat: req.is_repeat,
        }
    }
}
