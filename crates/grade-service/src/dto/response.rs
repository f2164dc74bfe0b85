//! 响应 DTO 定义
//!
//! 所有 REST API 的响应体结构

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Degree, Module, StudentGrade};

/// API 统一响应
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 创建成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            code: "SUCCESS".to_string(),
            message: "操作成功".to_string(),
            data: Some(data),
        }
    }

}

impl ApiResponse<()> {
    /// 创建成功响应（无数据，仅消息）
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            code: "SUCCESS".to_string(),
            message: message.into(),
            data: None,
        }
    }
}

/// 学位 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DegreeDto {
    pub id: i64,
    pub name: String,
    pub duration_years: i32,
    pub total_credits: i32,
}

impl From<Degree> for DegreeDto {
    fn from(degree: Degree) -> Self {
        Self {
            id: degree.id,
            name: degree.name,
            duration_years: degree.duration_years,
            total_credits: degree.total_credits,
        }
    }
}

/// 模块 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDto {
    pub id: i64,
    pub degree_id: i64,
    pub code: Option<String>,
    pub name: String,
    pub credits: i32,
    pub semester: i32,
    pub year: i32,
    pub category: String,
    pub is_gpa: bool,
}

impl From<Module> for ModuleDto {
    fn from(module: Module) -> Self {
        Self {
            id: module.id,
            degree_id: module.degree_id,
            code: module.code,
            name: module.name,
            credits: module.credits,
            semester: module.semester,
            year: module.year,
            category: module.category,
            is_gpa: module.is_gpa,
        }
    }
}

/// 学生成绩 DTO（成绩字段 + 内嵌模块）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentGradeDto {
    pub id: i64,
    pub student_id: String,
    pub module_id: i64,
    pub grade: Option<String>,
    pub grade_point: f64,
    pub is_completed: bool,
    pub is_repeat: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// 关联模块，调用方无需二次查询
    pub module: ModuleDto,
}

impl From<StudentGrade> for StudentGradeDto {
    fn from(grade: StudentGrade) -> Self {
        Self {
            id: grade.record.id,
            student_id: grade.record.student_id,
            module_id: grade.record.module_id,
            grade: grade.record.grade,
            grade_point: grade.record.grade_point,
            is_completed: grade.record.is_completed,
            is_repeat: grade.record.is_repeat,
            created_at: grade.record.created_at,
            updated_at: grade.record.updated_at,
            module: grade.module.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_success_shape() {
        let response = ApiResponse::success(vec![1, 2, 3]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["code"], "SUCCESS");
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_api_response_message_skips_data() {
        let response = ApiResponse::message("Grades initialized successfully");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["message"], "Grades initialized successfully");
        assert!(json.get("data").is_none(), "data 为 None 时不应序列化");
    }

    #[test]
    fn test_student_grade_dto_is_camel_case_with_nested_module() {
        use crate::models::{GradeRecord, Module, StudentGrade};
        use chrono::Utc;

        let grade = StudentGrade {
            record: GradeRecord {
                id: 1,
                student_id: "s1".to_string(),
                module_id: 10,
                grade: Some("B+".to_string()),
                grade_point: 3.3,
                is_completed: true,
                is_repeat: false,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            module: Module {
                id: 10,
                degree_id: 1,
                code: Some("CS101".to_string()),
                name: "Intro to CS".to_string(),
                credits: 10,
                semester: 1,
                year: 1,
                category: "core".to_string(),
                is_gpa: true,
            },
        };

        let json = serde_json::to_value(StudentGradeDto::from(grade)).unwrap();
        assert_eq!(json["studentId"], "s1");
        assert_eq!(json["gradePoint"], 3.3);
        assert_eq!(json["isCompleted"], true);
        assert_eq!(json["module"]["degreeId"], 1);
        assert_eq!(json["module"]["isGpa"], true);
    }
}
