//! bean 生命周期钩子

use beanwire_common::WiringResult;

/// 构造后初始化 trait
///
/// 钩子由 bean 的持有者在所有字段注入完成之后显式调用，且只调用一次。
/// 初始化失败视为致命的启动错误，调用方不重试。
pub trait PostConstruct {
    /// 执行一次性的构造后初始化
    fn post_construct(&mut self) -> WiringResult<()>;
}
