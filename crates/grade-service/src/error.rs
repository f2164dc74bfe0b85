//! 成绩服务错误类型定义
//!
//! 所有存储/认证依赖的故障都在服务边界转换为这里的错误类型，
//! 原始依赖错误不会直接暴露给调用方。

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// 成绩服务错误类型
#[derive(Debug, thiserror::Error)]
pub enum GradeError {
    // 认证错误
    #[error("未认证: {0}")]
    Unauthenticated(String),

    // 参考数据查询为空
    #[error("资源不存在: {0}")]
    NotFound(String),

    // 业务错误
    #[error("学位 {0} 下没有模块，无法初始化成绩单")]
    DegreeHasNoModules(i64),
    #[error("成绩单已初始化，不能重复播种")]
    AlreadyInitialized,
    #[error("成绩更新被拒绝：记录不存在或不属于当前学生")]
    UpdateRejected,

    // 验证错误
    #[error("参数验证失败: {0}")]
    Validation(String),

    // 系统错误
    #[error("存储层错误: {0}")]
    Storage(#[from] sqlx::Error),
    #[error("内部错误: {0}")]
    Internal(String),
}

impl GradeError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            // UpdateRejected 统一返回 400：不区分「不存在」和「不属于你」，
            // 避免向调用方泄露他人记录的存在性
            Self::DegreeHasNoModules(_) | Self::UpdateRejected => StatusCode::BAD_REQUEST,
            Self::AlreadyInitialized => StatusCode::CONFLICT,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 返回错误码（用于 API 响应）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthenticated(_) => "UNAUTHENTICATED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::DegreeHasNoModules(_) => "DEGREE_HAS_NO_MODULES",
            Self::AlreadyInitialized => "ALREADY_INITIALIZED",
            Self::UpdateRejected => "UPDATE_REJECTED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Storage(_) => "STORAGE_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for GradeError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 系统级错误只返回通用提示，详细信息仅记录日志，防止信息泄露
        let message = match &self {
            Self::Storage(e) => {
                tracing::error!(error = %e, "存储层操作失败");
                "存储服务暂不可用，请稍后重试".to_string()
            }
            Self::Internal(e) => {
                tracing::error!(error = %e, "内部错误");
                "服务内部错误，请稍后重试".to_string()
            }
            other => other.to_string(),
        };

        let body = json!({
            "success": false,
            "code": self.error_code(),
            "message": message,
            "data": serde_json::Value::Null
        });

        (status, axum::Json(body)).into_response()
    }
}

/// 从 validator 错误转换
impl From<validator::ValidationErrors> for GradeError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

/// 从 JSON 序列化错误转换
impl From<serde_json::Error> for GradeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON 处理错误: {}", err))
    }
}

/// 服务层 Result 类型别名
pub type Result<T> = std::result::Result<T, GradeError>;
