//! 业务服务层

pub mod grade_service;

pub use grade_service::GradeService;
