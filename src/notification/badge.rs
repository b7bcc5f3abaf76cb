//! 应用角标计数 - 进程级计数器，单一写入者
//!
//! 计数只能通过 `BadgeTracker` 的方法修改，其他组件一律只读。
//! 入站的展示回调和调用方发起的递增可能交错，用原子量串行化访问。

use std::sync::atomic::{AtomicU32, Ordering};

use tracing::debug;

use super::authority::NotificationAuthority;

/// 应用角标计数器，进程启动时从 0 开始
#[derive(Debug, Default)]
pub struct BadgeTracker {
    count: AtomicU32,
}

impl BadgeTracker {
    /// 创建计数器
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前计数
    pub fn current(&self) -> u32 {
        self.count.load(Ordering::SeqCst)
    }

    /// 计数加一，返回新值
    ///
    /// 在构建请求之后、提交之前由调用方执行；提交失败不回滚。
    pub fn increment(&self) -> u32 {
        self.count.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// 前台展示回调
    ///
    /// 展示内容带角标值时用它覆盖计数（覆盖，不是累加），
    /// 然后总是把当前值推送到主管机构的角标显示属性。返回推送的值。
    pub fn set_from_presented(
        &self,
        value: Option<u32>,
        authority: &dyn NotificationAuthority,
    ) -> u32 {
        if let Some(v) = value {
            self.count.store(v, Ordering::SeqCst);
        }

        let current = self.current();
        authority.set_badge(current);
        debug!(badge = current, "Badge pushed to display property");
        current
    }
}
