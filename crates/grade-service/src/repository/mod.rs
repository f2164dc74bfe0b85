//! 数据访问层
//!
//! trait 定义接口，sqlx Postgres 实现数据访问；
//! 服务层依赖抽象而非具体实现，支持 mock 测试。

pub mod catalog_repo;
pub mod grade_repo;
pub mod traits;

pub use catalog_repo::CatalogRepository;
pub use grade_repo::GradeRepository;
pub use traits::{CatalogRepositoryTrait, GradeRepositoryTrait};
