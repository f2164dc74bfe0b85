//! 学业成绩服务
//!
//! 跟踪学生在学位课程体系下的学业进度：选择学位后从其模块列表
//! 播种个人成绩单，并按模块记录和更新成绩。
//!
//! ## 核心功能
//!
//! - **课程目录查询**：学位与模块的只读查询
//! - **成绩播种**：按学位的模块列表批量创建学生成绩行
//! - **成绩查询**：按学业进度（学年、学期）排序返回成绩及关联模块
//! - **成绩更新**：带所有权谓词的条件更新，学生只能改动自己的行
//!
//! ## 模块结构
//!
//! - `models`: 实体模型
//! - `dto`: 请求和响应的数据传输对象
//! - `error`: 错误类型定义
//! - `repository`: 数据访问层（trait + sqlx Postgres 实现）
//! - `service`: 业务核心（播种 / 查询 / 更新）
//! - `auth`: 令牌校验（外部认证服务客户端）
//! - `middleware`: 认证中间件
//! - `handlers`: HTTP 请求处理器
//! - `routes`: 路由配置
//! - `state`: 应用状态
//!
//! ## 技术栈
//!
//! - Web 框架：Axum
//! - 数据访问：sqlx (PostgreSQL)
//! - 数据验证：validator
//! - 序列化：serde (camelCase)

pub mod auth;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

pub use auth::{AuthClient, TokenVerifier};
pub use dto::{ApiResponse, DegreeDto, ModuleDto, StudentGradeDto, UpdateGradeRequest};
pub use error::{GradeError, Result};
pub use models::{Degree, GradeRecord, GradeUpdate, Module, NewGradeRecord, StudentGrade};
pub use service::GradeService;
pub use state::AppState;
