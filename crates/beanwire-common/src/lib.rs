//! # Beanwire Common
//!
//! 这个 crate 提供了 Beanwire 各层共享的错误类型和元数据工具。
//!
//! ## 核心组件
//!
//! - [`ConfigError`] / [`RegistryError`] / [`WiringError`] / [`ContextError`] - 分层错误类型
//! - [`TypeInfo`] - 类型信息
//! - [`BeanMetadata`] - bean 元数据
//!
//! ## 设计原则
//!
//! - 基于 Rust 类型系统的编译时安全
//! - 按关注点分层的错误类型，顶层统一汇聚
//! - 启动期错误一律快速失败

pub mod errors;
pub mod metadata;

pub use errors::*;
pub use metadata::*;
