//! 认证中间件
//!
//! 从 Authorization header 提取 Bearer 令牌，经外部认证服务校验后
//! 把解析出的学生身份注入请求扩展。身份只来自这里——绝不从请求体
//! 或路径参数获取。

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::GradeError;
use crate::state::AppState;

/// 已解析的学生身份
///
/// 认证中间件校验成功后注入请求扩展，后续所有操作都以它为作用域
#[derive(Debug, Clone)]
pub struct StudentId(pub String);

/// 公开路由（不需要认证）
fn is_public_path(path: &str) -> bool {
    matches!(path, "/" | "/health" | "/ready" | "/degrees") || path.starts_with("/degrees/")
}

/// 认证中间件
///
/// header 缺失、格式错误、令牌被拒或校验过程出任何错，一律返回 401，
/// 且不触发任何存储访问。
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let path = request.uri().path();

    if is_public_path(path) {
        return next.run(request).await;
    }

    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) if header.starts_with("Bearer ") => &header[7..],
        _ => {
            return GradeError::Unauthenticated("缺少认证令牌".to_string()).into_response();
        }
    };

    match state.verifier.verify(token).await {
        Ok(student_id) => {
            request.extensions_mut().insert(StudentId(student_id));
            next.run(request).await
        }
        Err(e) => e.into_response(),
    }
}
