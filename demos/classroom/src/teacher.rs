//! 教师 bean
//!
//! 需要构造后装配的消费者：持有注册表句柄，在一次性的
//! `post_construct` 中按固定顺序查找可选的课程依赖。

use beanwire_abstractions::{ObjectRegistryExt, PostConstruct, RegistryAware, RegistryHandle};
use beanwire_common::{WiringError, WiringResult};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use crate::course::Course;

/// 装配时按顺序检查的课程名称
pub const COURSE_LOOKUP_ORDER: [&str; 2] = ["math", "physics"];

/// 教师 bean
///
/// 课程依赖是可选的：装配时只把注册表里存在的课程按检查顺序
/// 加入列表，缺席的名称直接跳过。类型不匹配则立即失败。
#[derive(Deserialize)]
pub struct Teacher {
    /// 注册表句柄，仅用于装配期查找
    #[serde(skip)]
    registry: Option<RegistryHandle>,
    /// 装配得到的课程列表，装配完成后不再变化
    #[serde(skip)]
    courses: Vec<Arc<Course>>,
}

impl Teacher {
    /// 创建尚未装配的教师 bean
    pub fn new() -> Self {
        Self {
            registry: None,
            courses: Vec::new(),
        }
    }

    /// 装配得到的课程列表
    pub fn courses(&self) -> &[Arc<Course>] {
        &self.courses
    }
}

impl Default for Teacher {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryAware for Teacher {
    fn set_registry(&mut self, registry: RegistryHandle) {
        // 可能被调用多次，以最后一次注入的句柄为准
        self.registry = Some(registry);
    }
}

impl PostConstruct for Teacher {
    fn post_construct(&mut self) -> WiringResult<()> {
        let registry = self
            .registry
            .as_ref()
            .ok_or_else(|| WiringError::RegistryNotSet {
                bean: "teacher".to_string(),
            })?;

        for name in COURSE_LOOKUP_ORDER {
            if registry.contains(name) {
                let course = registry.get::<Course>(name)?;
                debug!("装配课程: {}", name);
                self.courses.push(course);
            }
        }

        Ok(())
    }
}

impl std::fmt::Debug for Teacher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Teacher")
            .field("registry", &self.registry.as_ref().map(|_| "<registry>"))
            .field("courses", &self.courses)
            .finish()
    }
}
