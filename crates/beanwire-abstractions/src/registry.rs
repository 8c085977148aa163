//! 对象注册表抽象接口

use beanwire_common::{BeanMetadata, RegistryError, RegistryResult};
use std::any::Any;
use std::sync::Arc;

/// 注册表的统一句柄类型
///
/// 消费者 bean 通过该句柄做运行期查找，不感知具体实现。
pub type RegistryHandle = Arc<dyn ObjectRegistry>;

/// 对象注册表 trait
///
/// 提供按名称查询已注册 bean 的只读接口
pub trait ObjectRegistry: Send + Sync {
    /// 检查指定名称的 bean 是否存在
    fn contains(&self, name: &str) -> bool;

    /// 按名称获取 bean 的类型擦除实例
    fn get_any(&self, name: &str) -> RegistryResult<Arc<dyn Any + Send + Sync>>;

    /// 获取指定名称 bean 的元数据
    fn metadata(&self, name: &str) -> Option<BeanMetadata>;

    /// 获取所有已注册 bean 的元数据
    fn beans(&self) -> Vec<BeanMetadata>;
}

/// 类型化查询扩展 trait
///
/// 为所有注册表实现（包括 trait 对象）提供带期望类型检查的查询能力
pub trait ObjectRegistryExt: ObjectRegistry {
    /// 按名称获取 bean 并向下转换为期望类型
    ///
    /// 实际类型与期望类型不一致时返回 [`RegistryError::TypeMismatch`]，
    /// 绝不交出错误类型的实例。
    fn get<T>(&self, name: &str) -> RegistryResult<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        let instance = self.get_any(name)?;
        instance.downcast::<T>().map_err(|_| {
            let actual = self
                .metadata(name)
                .map(|meta| meta.type_info.full_name)
                .unwrap_or_else(|| "unknown".to_string());
            RegistryError::type_mismatch(name, std::any::type_name::<T>(), actual)
        })
    }
}

impl<R: ObjectRegistry + ?Sized> ObjectRegistryExt for R {}
