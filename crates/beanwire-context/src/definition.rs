//! 声明式 bean 定义文档
//!
//! 定义文档用 `[[bean]]` 数组声明 bean，数组在 TOML 和 JSON
//! 两种格式下都保留声明顺序。

use beanwire_common::{ConfigError, ConfigResult};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;

/// 单个 bean 定义
#[derive(Debug, Clone, Deserialize)]
pub struct BeanDefinition {
    /// bean 名称，注册表中的键
    pub name: String,
    /// kind 标签，决定用哪个已注册的工厂构造实例
    pub kind: String,
    /// 构造 bean 所需的属性表
    #[serde(default = "empty_properties")]
    pub properties: Value,
}

fn empty_properties() -> Value {
    Value::Object(serde_json::Map::new())
}

impl BeanDefinition {
    /// 创建不带属性的 bean 定义
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            properties: empty_properties(),
        }
    }

    /// 设置属性表
    pub fn with_properties(mut self, properties: Value) -> Self {
        self.properties = properties;
        self
    }
}

/// bean 定义文档
#[derive(Debug, Clone, Deserialize)]
pub struct BeanDocument {
    /// 文档中声明的全部 bean
    #[serde(default)]
    pub bean: Vec<BeanDefinition>,
}

/// 解析 TOML 格式的定义文档
pub fn parse_toml_document(content: &str) -> ConfigResult<Vec<BeanDefinition>> {
    let value: toml::Value = toml::from_str(content).map_err(|e| ConfigError::ParseError {
        source: Box::new(e),
    })?;
    from_json_value(toml_to_json(&value))
}

/// 解析 JSON 格式的定义文档
pub fn parse_json_document(content: &str) -> ConfigResult<Vec<BeanDefinition>> {
    let value: Value = serde_json::from_str(content).map_err(|e| ConfigError::ParseError {
        source: Box::new(e),
    })?;
    from_json_value(value)
}

/// 从 JSON 值还原定义列表并校验
fn from_json_value(value: Value) -> ConfigResult<Vec<BeanDefinition>> {
    let document: BeanDocument = serde_json::from_value(value)?;
    validate_definitions(&document.bean)?;
    Ok(document.bean)
}

/// 校验定义列表
///
/// 名称与 kind 不能为空，同一文档内名称必须唯一。
pub fn validate_definitions(definitions: &[BeanDefinition]) -> ConfigResult<()> {
    let mut seen = HashSet::new();
    for definition in definitions {
        if definition.name.is_empty() {
            return Err(ConfigError::validation_error("bean 名称不能为空"));
        }
        if definition.kind.is_empty() {
            return Err(ConfigError::validation_error(format!(
                "bean 缺少 kind 标签: {}",
                definition.name
            )));
        }
        if !seen.insert(definition.name.as_str()) {
            return Err(ConfigError::DuplicateDefinition {
                name: definition.name.clone(),
            });
        }
    }
    Ok(())
}

/// 将 TOML 值转换为 JSON 值
fn toml_to_json(value: &toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s.clone()),
        toml::Value::Integer(i) => Value::Number(serde_json::Number::from(*i)),
        toml::Value::Float(f) => Value::Number(
            serde_json::Number::from_f64(*f).unwrap_or_else(|| serde_json::Number::from(0)),
        ),
        toml::Value::Boolean(b) => Value::Bool(*b),
        toml::Value::Array(arr) => Value::Array(arr.iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .iter()
                .map(|(k, v)| (k.clone(), toml_to_json(v)))
                .collect(),
        ),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
    }
}
