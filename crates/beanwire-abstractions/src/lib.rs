//! # Beanwire Abstractions
//!
//! 对象注册与装配抽象层，定义 bean 查找和构造后装配的核心接口。
//!
//! ## 核心接口
//!
//! - [`ObjectRegistry`] - 对象注册表接口
//! - [`ObjectRegistryExt`] - 类型化查询扩展
//! - [`RegistryAware`] - 注册表感知接口
//! - [`PostConstruct`] - 构造后初始化钩子

pub mod aware;
pub mod lifecycle;
pub mod registry;

pub use aware::*;
pub use lifecycle::*;
pub use registry::*;
