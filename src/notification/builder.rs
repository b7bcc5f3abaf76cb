//! 请求构建 - 组装通知内容与触发时间
//!
//! 文案是固定的可本地化键，角标值取计数器当前值加一。
//! 构建本身不修改计数器：递增是调用方在构建后、提交前执行的副作用。

use anyhow::{bail, Result};

use super::badge::BadgeTracker;
use super::category::{CategoryRegistry, TIMER_EXPIRED_CATEGORY};
use super::content::{NotificationContent, NotificationRequest, Sound, ALARM_REQUEST_ID};
use super::time_resolver::FireTime;

/// 叫醒闹钟请求构建器
pub struct RequestBuilder<'a> {
    registry: &'a CategoryRegistry,
    sound: Sound,
}

impl<'a> RequestBuilder<'a> {
    /// 创建构建器
    pub fn new(registry: &'a CategoryRegistry) -> Self {
        Self {
            registry,
            sound: Sound::Default,
        }
    }

    /// 设置通知声音
    pub fn sound(mut self, sound: Sound) -> Self {
        self.sound = sound;
        self
    }

    /// 构建调度请求
    ///
    /// 引用未注册的分类是契约违例，直接构建失败，
    /// 不产出无分类的通知。
    pub fn build(&self, trigger: FireTime, badge: &BadgeTracker) -> Result<NotificationRequest> {
        if !self.registry.contains(TIMER_EXPIRED_CATEGORY) {
            bail!(
                "notification category {} is not registered",
                TIMER_EXPIRED_CATEGORY
            );
        }

        Ok(NotificationRequest {
            identifier: ALARM_REQUEST_ID.to_string(),
            content: NotificationContent::wake_alarm(self.sound.clone(), badge.current() + 1),
            trigger,
        })
    }
}
