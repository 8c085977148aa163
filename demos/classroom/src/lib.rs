//! # Classroom 演示域
//!
//! Beanwire 的演示 bean 集合：课程、学生和需要装配的教师。
//!
//! ## bean 一览
//!
//! - [`Course`] - 普通的叶子 bean，只有名称
//! - [`Student`] - 由定义文档属性填充的 bean
//! - [`Teacher`] - 构造后装配的消费者 bean

pub mod course;
pub mod student;
pub mod teacher;

pub use course::Course;
pub use student::Student;
pub use teacher::{Teacher, COURSE_LOOKUP_ORDER};
