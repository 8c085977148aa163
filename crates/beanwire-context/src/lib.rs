//! # bean 上下文组合层
//!
//! 这个 crate 是 Beanwire 的组合层，负责把声明式定义文档解析成
//! 构造完成、装配完成的 bean 上下文。
//!
//! ## 主要功能
//!
//! - **上下文构建器**: 使用构建者模式组装定义来源和 kind 工厂
//! - **声明式定义**: TOML / JSON 两种格式的 `[[bean]]` 定义文档
//! - **两阶段构造**: 先注册普通 bean，再按定义顺序构造并装配消费者
//!
//! ## 基本使用
//!
//! ```rust,no_run
//! use beanwire_context::BeanContext;
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! struct Greeting {
//!     text: String,
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 构建 bean 上下文
//!     let context = BeanContext::builder()
//!         .register_kind::<Greeting>("greeting")
//!         .add_config_toml("config/beans.toml")?
//!         .build()?;
//!
//!     // 按名称查找并转换为期望类型
//!     let greeting = context.get_bean::<Greeting>("hello")?;
//!     println!("问候语: {}", greeting.text);
//!
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod definition;
pub mod kinds;

// 重新导出主要类型
pub use context::{BeanContext, ContextBuilder, ContextSummary};
pub use definition::{BeanDefinition, BeanDocument};
pub use kinds::{BeanFactoryFn, BeanKinds, KindRegistration};

// 重新导出错误类型
pub use beanwire_common::{ContextError, ContextResult};
