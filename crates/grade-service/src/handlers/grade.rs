//! 成绩 API 处理器
//!
//! 全部路由要求认证；student_id 一律取自中间件注入的已验证身份

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use tracing::info;
use validator::Validate;

use crate::{
    dto::{ApiResponse, StudentGradeDto, UpdateGradeRequest},
    error::GradeError,
    middleware::StudentId,
    state::AppState,
};

/// 查询当前学生的全部成绩（含关联模块）
///
/// GET /grades
pub async fn list_my_grades(
    State(state): State<AppState>,
    Extension(student): Extension<StudentId>,
) -> Result<Json<ApiResponse<Vec<StudentGradeDto>>>, GradeError> {
    let grades = state.grades.student_grades(&student.0).await?;
    let dtos = grades.into_iter().map(StudentGradeDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

/// 初始化（播种）当前学生的成绩单
///
/// POST /grades/init/{degree_id}
pub async fn initialize_grades(
    State(state): State<AppState>,
    Path(degree_id): Path<i64>,
    Extension(student): Extension<StudentId>,
) -> Result<Json<ApiResponse<()>>, GradeError> {
    let inserted = state.grades.initialize_grades(&student.0, degree_id).await?;

    info!(degree_id, inserted, "Grade sheet initialized");

    Ok(Json(ApiResponse::message("Grades initialized successfully")))
}

/// 更新当前学生的一条成绩
///
/// PUT /grades/{grade_id}
pub async fn update_grade(
    State(state): State<AppState>,
    Path(grade_id): Path<i64>,
    Extension(student): Extension<StudentId>,
    Json(req): Json<UpdateGradeRequest>,
) -> Result<Json<ApiResponse<()>>, GradeError> {
    req.validate()?;

    state
        .grades
        .update_grade(&student.0, grade_id, req.into())
        .await?;

    Ok(Json(ApiResponse::message("Grade updated")))
}
