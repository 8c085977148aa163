//! 元数据定义
//!
//! 提供 bean 和类型的元数据信息

use std::any::TypeId;

/// 类型信息
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// 类型名称
    pub name: String,
    /// 类型ID
    pub id: TypeId,
    /// 完整类型路径
    pub full_name: String,
}

impl TypeInfo {
    /// 从类型获取类型信息
    pub fn of<T: 'static>() -> Self {
        Self {
            name: std::any::type_name::<T>()
                .split("::")
                .last()
                .unwrap_or("Unknown")
                .to_string(),
            id: TypeId::of::<T>(),
            full_name: std::any::type_name::<T>().to_string(),
        }
    }

    /// 获取简短的类型名称（不包含模块路径）
    pub fn short_name(&self) -> &str {
        &self.name
    }
}

/// bean 元数据
///
/// 描述注册表中一个 bean 的名称、来源 kind 与具体类型。
#[derive(Debug, Clone)]
pub struct BeanMetadata {
    /// bean 名称，注册表中的唯一键
    pub name: String,
    /// 定义中声明的 kind 标签
    pub kind: String,
    /// 类型信息
    pub type_info: TypeInfo,
    /// 注册时间
    pub registered_at: chrono::DateTime<chrono::Utc>,
}

impl BeanMetadata {
    /// 创建新的 bean 元数据
    pub fn new(name: impl Into<String>, kind: impl Into<String>, type_info: TypeInfo) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            type_info,
            registered_at: chrono::Utc::now(),
        }
    }

    /// 从类型创建 bean 元数据
    pub fn of<T: 'static>(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::new(name, kind, TypeInfo::of::<T>())
    }
}
