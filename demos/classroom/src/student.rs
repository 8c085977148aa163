//! 学生 bean

use serde::Deserialize;

/// 学生 bean
///
/// 完全由定义文档中的属性表填充，不参与运行期查找。
#[derive(Debug, Clone, Deserialize)]
pub struct Student {
    /// 学号
    no: u32,
    /// 姓名
    name: String,
}

impl Student {
    /// 学号
    pub fn no(&self) -> u32 {
        self.no
    }

    /// 姓名
    pub fn name(&self) -> &str {
        &self.name
    }
}
