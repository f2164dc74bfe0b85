//! 令牌校验
//!
//! 认证本身委托给外部认证服务：本服务只拿着 Bearer 令牌去校验，
//! 换回稳定的学生标识。校验接口抽象为 trait，便于测试替换。

pub mod verifier;

pub use verifier::{AuthClient, TokenVerifier};

#[cfg(test)]
pub use verifier::MockTokenVerifier;
