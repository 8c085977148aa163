//! # 内存对象注册表实现
//!
//! 提供基于 HashMap 的 [`ObjectRegistry`] 具体实现

use beanwire_abstractions::ObjectRegistry;
use beanwire_common::{BeanMetadata, RegistryError, RegistryResult};
use parking_lot::RwLock;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// 注册表中的一条 bean 记录
#[derive(Clone)]
struct RegisteredBean {
    /// bean 元数据
    metadata: BeanMetadata,
    /// 类型擦除的实例
    instance: Arc<dyn Any + Send + Sync>,
}

impl std::fmt::Debug for RegisteredBean {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredBean")
            .field("metadata", &self.metadata)
            .field("instance", &"<instance>")
            .finish()
    }
}

/// 基于内存的对象注册表
///
/// 所有注册都发生在启动期的单线程流程中，读写锁只是为了让
/// 注册表可以安全地以共享句柄的形式分发给消费者 bean。
#[derive(Debug)]
pub struct InMemoryRegistry {
    /// 按名称索引的 bean 记录
    beans: RwLock<HashMap<String, RegisteredBean>>,
}

impl InMemoryRegistry {
    /// 创建空的注册表
    pub fn new() -> Self {
        Self {
            beans: RwLock::new(HashMap::new()),
        }
    }

    /// 注册一个构造完成的 bean 实例
    ///
    /// 名称在注册表内必须唯一，重复注册返回 [`RegistryError::DuplicateBean`]。
    pub fn insert(
        &self,
        metadata: BeanMetadata,
        instance: Arc<dyn Any + Send + Sync>,
    ) -> RegistryResult<()> {
        let mut beans = self.beans.write();
        if beans.contains_key(&metadata.name) {
            return Err(RegistryError::DuplicateBean {
                name: metadata.name.clone(),
            });
        }

        debug!("注册 bean: {} ({})", metadata.name, metadata.type_info.full_name);
        beans.insert(metadata.name.clone(), RegisteredBean { metadata, instance });
        Ok(())
    }

    /// 按值注册 bean 的便捷方法
    pub fn insert_value<T>(
        &self,
        name: impl Into<String>,
        kind: impl Into<String>,
        value: T,
    ) -> RegistryResult<()>
    where
        T: Send + Sync + 'static,
    {
        self.insert(BeanMetadata::of::<T>(name, kind), Arc::new(value))
    }

    /// 已注册的 bean 数量
    pub fn len(&self) -> usize {
        self.beans.read().len()
    }

    /// 注册表是否为空
    pub fn is_empty(&self) -> bool {
        self.beans.read().is_empty()
    }
}

impl Default for InMemoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectRegistry for InMemoryRegistry {
    fn contains(&self, name: &str) -> bool {
        self.beans.read().contains_key(name)
    }

    fn get_any(&self, name: &str) -> RegistryResult<Arc<dyn Any + Send + Sync>> {
        let beans = self.beans.read();
        match beans.get(name) {
            Some(entry) => Ok(entry.instance.clone()),
            None => Err(RegistryError::bean_not_found(name)),
        }
    }

    fn metadata(&self, name: &str) -> Option<BeanMetadata> {
        self.beans.read().get(name).map(|entry| entry.metadata.clone())
    }

    fn beans(&self) -> Vec<BeanMetadata> {
        self.beans.read().values().map(|entry| entry.metadata.clone()).collect()
    }
}
