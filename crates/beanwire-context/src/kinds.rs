//! bean kind 工厂注册
//!
//! kind 标签把定义文档中的声明映射到具体的 Rust 类型。

use crate::definition::BeanDefinition;
use beanwire_abstractions::{PostConstruct, RegistryAware, RegistryHandle};
use beanwire_common::{ConfigError, ContextError, ContextResult, TypeInfo};
use serde::de::DeserializeOwned;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// bean 工厂函数类型
///
/// 输入 bean 定义与注册表句柄，输出构造（并在需要时装配）完成的实例。
pub type BeanFactoryFn = Arc<
    dyn Fn(&BeanDefinition, &RegistryHandle) -> ContextResult<Arc<dyn Any + Send + Sync>>
        + Send
        + Sync,
>;

/// 一个 kind 的注册信息
#[derive(Clone)]
pub struct KindRegistration {
    /// 构造出的具体类型信息
    type_info: TypeInfo,
    /// 是否为需要装配的消费者类型
    wired: bool,
    /// 工厂函数
    factory: BeanFactoryFn,
}

impl KindRegistration {
    /// 构造出的具体类型信息
    pub fn type_info(&self) -> &TypeInfo {
        &self.type_info
    }

    /// 该 kind 是否需要构造后装配
    pub fn is_wired(&self) -> bool {
        self.wired
    }

    /// 按定义构造一个实例
    pub fn construct(
        &self,
        definition: &BeanDefinition,
        registry: &RegistryHandle,
    ) -> ContextResult<Arc<dyn Any + Send + Sync>> {
        (self.factory)(definition, registry)
    }
}

impl std::fmt::Debug for KindRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KindRegistration")
            .field("type_info", &self.type_info)
            .field("wired", &self.wired)
            .field("factory", &"<function>")
            .finish()
    }
}

/// kind 标签到工厂的映射表
#[derive(Debug, Default)]
pub struct BeanKinds {
    /// 已注册的 kind
    kinds: HashMap<String, KindRegistration>,
}

impl BeanKinds {
    /// 创建空的映射表
    pub fn new() -> Self {
        Self {
            kinds: HashMap::new(),
        }
    }

    /// 注册普通 bean kind
    ///
    /// 实例完全由定义中的属性表反序列化得到，不参与装配。
    pub fn register<T>(&mut self, kind: impl Into<String>)
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        let factory: BeanFactoryFn = Arc::new(|definition, _registry| {
            let value: T = bind_properties(definition)?;
            Ok(Arc::new(value) as Arc<dyn Any + Send + Sync>)
        });
        self.insert(kind.into(), TypeInfo::of::<T>(), false, factory);
    }

    /// 注册需要装配的消费者 bean kind
    ///
    /// 构造完成后依次执行 `set_registry` 和 `post_construct`，再冻结实例。
    pub fn register_wired<T>(&mut self, kind: impl Into<String>)
    where
        T: DeserializeOwned + RegistryAware + PostConstruct + Send + Sync + 'static,
    {
        let factory: BeanFactoryFn = Arc::new(|definition, registry| {
            let mut value: T = bind_properties(definition)?;
            value.set_registry(registry.clone());
            value.post_construct().map_err(ContextError::from)?;
            Ok(Arc::new(value) as Arc<dyn Any + Send + Sync>)
        });
        self.insert(kind.into(), TypeInfo::of::<T>(), true, factory);
    }

    /// 查找 kind 的注册信息
    pub fn get(&self, kind: &str) -> Option<&KindRegistration> {
        self.kinds.get(kind)
    }

    /// kind 是否已注册
    pub fn contains(&self, kind: &str) -> bool {
        self.kinds.contains_key(kind)
    }

    /// 已注册的 kind 数量
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// 映射表是否为空
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    fn insert(&mut self, kind: String, type_info: TypeInfo, wired: bool, factory: BeanFactoryFn) {
        debug!("注册 bean kind: {} -> {}", kind, type_info.full_name);
        self.kinds.insert(
            kind,
            KindRegistration {
                type_info,
                wired,
                factory,
            },
        );
    }
}

/// 把定义中的属性表绑定到具体类型
fn bind_properties<T: DeserializeOwned>(definition: &BeanDefinition) -> ContextResult<T> {
    serde_json::from_value(definition.properties.clone()).map_err(|e| {
        ContextError::from(ConfigError::type_conversion_error(format!(
            "bean 属性绑定失败: {} (kind: {}), 原因: {}",
            definition.name, definition.kind, e
        )))
    })
}
