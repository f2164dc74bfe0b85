//! 实体模型定义

pub mod degree;
pub mod grade;

pub use degree::{Degree, Module};
pub use grade::{GradeRecord, GradeUpdate, NewGradeRecord, StudentGrade};
