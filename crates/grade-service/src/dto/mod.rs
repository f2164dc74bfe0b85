//! 请求和响应的数据传输对象

pub mod request;
pub mod response;

pub use request::UpdateGradeRequest;
pub use response::{ApiResponse, DegreeDto, ModuleDto, StudentGradeDto};
