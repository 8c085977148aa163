//! 课程 bean

use serde::Deserialize;

/// 课程 bean
///
/// 普通的叶子 bean，创建后不再变化。
#[derive(Debug, Clone, Deserialize)]
pub struct Course {
    /// 课程名称
    name: String,
}

impl Course {
    /// 创建新课程
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// 课程名称
    pub fn name(&self) -> &str {
        &self.name
    }
}
