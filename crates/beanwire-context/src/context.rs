//! bean 上下文与构建器
//!
//! 构建器收集定义来源与 kind 工厂，`build` 一次性完成解析、
//! 构造和装配，任何一步失败都会中止启动。

use crate::definition::{self, BeanDefinition};
use crate::kinds::{BeanKinds, KindRegistration};
use beanwire_abstractions::{
    ObjectRegistry, ObjectRegistryExt, PostConstruct, RegistryAware, RegistryHandle,
};
use beanwire_common::{
    BeanMetadata, ConfigError, ContextError, ContextResult, RegistryResult,
};
use beanwire_registry::InMemoryRegistry;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 定义来源
#[derive(Debug, Clone)]
enum DefinitionSource {
    /// TOML 定义文件
    TomlFile(PathBuf),
    /// JSON 定义文件
    JsonFile(PathBuf),
    /// 程序内直接提供的定义
    Inline(Vec<BeanDefinition>),
}

impl DefinitionSource {
    /// 加载该来源中的全部定义
    fn load(&self) -> ContextResult<Vec<BeanDefinition>> {
        match self {
            Self::TomlFile(path) => {
                debug!("加载 TOML 定义文件: {}", path.display());
                let content = std::fs::read_to_string(path)
                    .map_err(|e| ConfigError::FileReadError { source: e })?;
                Ok(definition::parse_toml_document(&content)?)
            }
            Self::JsonFile(path) => {
                debug!("加载 JSON 定义文件: {}", path.display());
                let content = std::fs::read_to_string(path)
                    .map_err(|e| ConfigError::FileReadError { source: e })?;
                Ok(definition::parse_json_document(&content)?)
            }
            Self::Inline(definitions) => {
                definition::validate_definitions(definitions)?;
                Ok(definitions.clone())
            }
        }
    }

    /// 来源的描述文本，用于日志
    fn describe(&self) -> String {
        match self {
            Self::TomlFile(path) => format!("toml:{}", path.display()),
            Self::JsonFile(path) => format!("json:{}", path.display()),
            Self::Inline(definitions) => format!("inline:{} 条定义", definitions.len()),
        }
    }
}

/// bean 上下文构建器
///
/// 定义来源按添加顺序解析，同名定义以后加入的来源为准。
pub struct ContextBuilder {
    /// 定义来源，按添加顺序排列
    sources: Vec<DefinitionSource>,
    /// kind 工厂映射表
    kinds: BeanKinds,
}

impl ContextBuilder {
    /// 创建新的上下文构建器
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            kinds: BeanKinds::new(),
        }
    }

    /// 添加 TOML 定义文件
    pub fn add_config_toml<P: AsRef<Path>>(mut self, path: P) -> ContextResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ContextError::BootstrapFailed {
                message: format!("配置文件不存在: {}", path.display()),
            });
        }

        info!("添加 TOML 定义文件: {}", path.display());
        self.sources.push(DefinitionSource::TomlFile(path.to_path_buf()));
        Ok(self)
    }

    /// 添加 JSON 定义文件
    pub fn add_config_json<P: AsRef<Path>>(mut self, path: P) -> ContextResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ContextError::BootstrapFailed {
                message: format!("配置文件不存在: {}", path.display()),
            });
        }

        info!("添加 JSON 定义文件: {}", path.display());
        self.sources.push(DefinitionSource::JsonFile(path.to_path_buf()));
        Ok(self)
    }

    /// 添加程序内定义
    pub fn add_definitions(mut self, definitions: Vec<BeanDefinition>) -> Self {
        debug!("添加内联定义: {} 条", definitions.len());
        self.sources.push(DefinitionSource::Inline(definitions));
        self
    }

    /// 注册普通 bean kind
    pub fn register_kind<T>(mut self, kind: impl Into<String>) -> Self
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        self.kinds.register::<T>(kind);
        self
    }

    /// 注册需要装配的消费者 bean kind
    pub fn register_wired_kind<T>(mut self, kind: impl Into<String>) -> Self
    where
        T: DeserializeOwned + RegistryAware + PostConstruct + Send + Sync + 'static,
    {
        self.kinds.register_wired::<T>(kind);
        self
    }

    /// 构建 bean 上下文
    ///
    /// 依次完成：解析全部定义来源、构造普通 bean、构造并装配消费者
    /// bean。消费者按定义顺序装配，后声明的消费者可以查到先声明的。
    pub fn build(self) -> ContextResult<BeanContext> {
        let started_at = chrono::Utc::now();
        let Self { sources, kinds } = self;
        info!("开始构建 bean 上下文: {} 个定义来源", sources.len());

        // 解析并合并全部定义来源
        let definitions = merge_sources(&sources)?;
        debug!("定义合并完成: {} 条", definitions.len());

        // 把每条定义和它的 kind 工厂配对，未知 kind 快速失败
        let mut plain = Vec::new();
        let mut wired = Vec::new();
        for def in &definitions {
            let registration =
                kinds
                    .get(&def.kind)
                    .ok_or_else(|| ContextError::UnknownKind {
                        name: def.name.clone(),
                        kind: def.kind.clone(),
                    })?;
            if registration.is_wired() {
                wired.push((def, registration));
            } else {
                plain.push((def, registration));
            }
        }

        let registry = Arc::new(InMemoryRegistry::new());
        let handle: RegistryHandle = registry.clone();
        let plain_count = plain.len();
        let wired_count = wired.len();

        // 第一阶段：构造并注册普通 bean，之后装配阶段才能查到它们
        for (def, registration) in plain {
            construct_and_insert(&registry, &handle, def, registration)?;
        }

        // 第二阶段：按定义顺序构造并装配消费者 bean
        for (def, registration) in wired {
            debug!("装配消费者 bean: {}", def.name);
            construct_and_insert(&registry, &handle, def, registration)?;
        }

        let summary = ContextSummary {
            started_at,
            sources: sources.len(),
            definitions: definitions.len(),
            beans_constructed: plain_count + wired_count,
            consumers_wired: wired_count,
        };
        info!(
            "bean 上下文构建完成: {} 条定义, {} 个 bean, 其中 {} 个完成装配",
            summary.definitions, summary.beans_constructed, summary.consumers_wired
        );

        Ok(BeanContext { registry, summary })
    }
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// 按来源顺序合并定义，同名定义以后加入的来源为准
fn merge_sources(sources: &[DefinitionSource]) -> ContextResult<Vec<BeanDefinition>> {
    let mut merged: Vec<BeanDefinition> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for source in sources {
        let definitions = source.load()?;
        debug!("来源 {} 提供 {} 条定义", source.describe(), definitions.len());

        for def in definitions {
            match index.get(&def.name) {
                Some(&position) => {
                    warn!("bean 定义被后加入的来源覆盖: {}", def.name);
                    merged[position] = def;
                }
                None => {
                    index.insert(def.name.clone(), merged.len());
                    merged.push(def);
                }
            }
        }
    }

    Ok(merged)
}

/// 构造一个 bean 并注册进注册表
fn construct_and_insert(
    registry: &InMemoryRegistry,
    handle: &RegistryHandle,
    def: &BeanDefinition,
    registration: &KindRegistration,
) -> ContextResult<()> {
    debug!("构造 bean: {} (kind: {})", def.name, def.kind);
    let instance = registration.construct(def, handle)?;
    let metadata = BeanMetadata::new(
        def.name.clone(),
        def.kind.clone(),
        registration.type_info().clone(),
    );
    registry.insert(metadata, instance)?;
    Ok(())
}

/// bean 上下文
///
/// 构建完成后的只读容器门面，持有注册表与构建摘要。
pub struct BeanContext {
    /// 对象注册表
    registry: Arc<InMemoryRegistry>,
    /// 构建摘要
    summary: ContextSummary,
}

impl BeanContext {
    /// 创建上下文构建器
    pub fn builder() -> ContextBuilder {
        ContextBuilder::new()
    }

    /// 检查指定名称的 bean 是否存在
    pub fn contains_bean(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// 按名称获取 bean 并转换为期望类型
    pub fn get_bean<T>(&self, name: &str) -> RegistryResult<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        self.registry.get::<T>(name)
    }

    /// 获取注册表句柄
    pub fn registry(&self) -> RegistryHandle {
        self.registry.clone()
    }

    /// 所有已注册 bean 的元数据
    pub fn beans(&self) -> Vec<BeanMetadata> {
        self.registry.beans()
    }

    /// 构建摘要
    pub fn summary(&self) -> &ContextSummary {
        &self.summary
    }
}

impl std::fmt::Debug for BeanContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BeanContext")
            .field("beans", &self.registry.len())
            .field("summary", &self.summary)
            .finish()
    }
}

/// 上下文构建摘要
#[derive(Debug, Clone)]
pub struct ContextSummary {
    /// 构建开始时间
    pub started_at: chrono::DateTime<chrono::Utc>,
    /// 定义来源数量
    pub sources: usize,
    /// 合并后的定义条数
    pub definitions: usize,
    /// 构造完成的 bean 数量
    pub beans_constructed: usize,
    /// 完成装配的消费者数量
    pub consumers_wired: usize,
}
