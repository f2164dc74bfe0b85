//! 课程目录 API 处理器
//!
//! 学位与模块的只读查询，公开路由

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    dto::{ApiResponse, DegreeDto, ModuleDto},
    error::GradeError,
    state::AppState,
};

/// 列出全部学位
///
/// GET /degrees
///
/// 前端用它渲染「选择学位」下拉框
pub async fn list_degrees(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<DegreeDto>>>, GradeError> {
    let degrees = state.grades.list_degrees().await?;
    let dtos = degrees.into_iter().map(DegreeDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

/// 列出某学位的课程体系（全部模块）
///
/// GET /degrees/{degree_id}/modules
pub async fn list_degree_modules(
    State(state): State<AppState>,
    Path(degree_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<ModuleDto>>>, GradeError> {
    let modules = state.grades.list_degree_modules(degree_id).await?;
    let dtos = modules.into_iter().map(ModuleDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}
