//! 注册表感知接口

use crate::registry::RegistryHandle;

/// 注册表感知 trait
///
/// 构造完成后需要持有注册表句柄的 bean 实现此 trait。
/// `set_registry` 可能被调用多次，实现必须幂等，以最后一次注入的句柄为准。
pub trait RegistryAware {
    /// 注入注册表句柄
    fn set_registry(&mut self, registry: RegistryHandle);
}
