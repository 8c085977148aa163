//! 错误类型定义

use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },

    #[error("配置文件读取失败: {source}")]
    FileReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("配置解析失败: {source}")]
    ParseError {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("配置验证失败: {message}")]
    ValidationError { message: String },

    #[error("配置序列化失败: {source}")]
    SerializationError {
        #[from]
        source: serde_json::Error,
    },

    #[error("重复的 bean 定义: {name}")]
    DuplicateDefinition { name: String },

    #[error("配置类型转换失败: {message}")]
    TypeConversionError { message: String },
}

impl ConfigError {
    /// 创建验证错误
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    /// 创建类型转换错误
    pub fn type_conversion_error(message: impl Into<String>) -> Self {
        Self::TypeConversionError {
            message: message.into(),
        }
    }
}

/// 注册表错误类型
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("bean 未注册: {name}")]
    BeanNotFound { name: String },

    #[error("bean 类型不匹配: {name}, 期望 {expected}, 实际 {actual}")]
    TypeMismatch {
        name: String,
        expected: String,
        actual: String,
    },

    #[error("bean 重复注册: {name}")]
    DuplicateBean { name: String },
}

impl RegistryError {
    /// 创建 bean 未注册错误
    pub fn bean_not_found(name: impl Into<String>) -> Self {
        Self::BeanNotFound { name: name.into() }
    }

    /// 创建类型不匹配错误
    pub fn type_mismatch(
        name: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            name: name.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// 装配错误类型
#[derive(Error, Debug)]
pub enum WiringError {
    #[error("注册表引用尚未注入: {bean}")]
    RegistryNotSet { bean: String },

    #[error("依赖查找失败: {source}")]
    LookupFailed {
        #[from]
        source: RegistryError,
    },

    #[error("构造后初始化失败: {bean}, 原因: {message}")]
    PostConstructFailed { bean: String, message: String },
}

/// 上下文错误类型
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("配置错误: {source}")]
    ConfigError {
        #[from]
        source: ConfigError,
    },

    #[error("注册表错误: {source}")]
    RegistryError {
        #[from]
        source: RegistryError,
    },

    #[error("装配错误: {source}")]
    WiringError {
        #[from]
        source: WiringError,
    },

    #[error("未知的 bean 类型: {name}, kind: {kind}")]
    UnknownKind { name: String, kind: String },

    #[error("上下文启动失败: {message}")]
    BootstrapFailed { message: String },
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type RegistryResult<T> = Result<T, RegistryError>;
pub type WiringResult<T> = Result<T, WiringError>;
pub type ContextResult<T> = Result<T, ContextError>;
