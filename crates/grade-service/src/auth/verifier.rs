//! 令牌校验器
//!
//! 任何校验失败（令牌被拒、网络故障、响应不合法）都归一为
//! Unauthenticated：调用方只需要知道「这个请求没有可信身份」。

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use unistat_shared::config::AuthConfig;

use crate::error::{GradeError, Result};

/// 令牌校验器接口
///
/// 成功时返回稳定的、不透明的学生标识字符串
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<String>;
}

/// 认证服务返回的用户信息
#[derive(Debug, Deserialize)]
struct VerifiedUser {
    id: String,
}

/// 外部认证服务客户端
///
/// 通过 HTTP 调用认证服务的用户端点校验令牌。
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AuthClient {
    pub fn new(config: &AuthConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| GradeError::Internal(format!("构建 HTTP 客户端失败: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl TokenVerifier for AuthClient {
    async fn verify(&self, token: &str) -> Result<String> {
        let url = format!("{}/auth/v1/user", self.base_url);

        let response = self
            .http
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "认证服务请求失败");
                GradeError::Unauthenticated("令牌校验失败".to_string())
            })?;

        if !response.status().is_success() {
            return Err(GradeError::Unauthenticated("无效的令牌".to_string()));
        }

        let user: VerifiedUser = response.json().await.map_err(|e| {
            warn!(error = %e, "认证服务响应解析失败");
            GradeError::Unauthenticated("令牌校验失败".to_string())
        })?;

        if user.id.is_empty() {
            return Err(GradeError::Unauthenticated("无效的令牌".to_string()));
        }

        Ok(user.id)
    }
}
