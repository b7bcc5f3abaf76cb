//! 通知内容与调度请求

use serde::{Deserialize, Serialize};

use super::category::TIMER_EXPIRED_CATEGORY;
use super::time_resolver::FireTime;

/// 叫醒闹钟的固定请求标识符
///
/// 重复调度复用同一标识符：主管机构会替换同标识符的待决请求，
/// 而不是堆叠重复通知。
pub const ALARM_REQUEST_ID: &str = "morning-alarm";

/// 闹钟文案（可本地化键）
pub const ALARM_TITLE: &str = "Wake up!";
pub const ALARM_SUBTITLE: &str = "Time to get out of the bed";
pub const ALARM_BODY: &str = "Rise and shine! It's morning time!";

/// 通知声音
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Sound {
    /// 系统默认提示音
    #[default]
    Default,
    /// 静音
    None,
    /// 自定义音频资源名
    Custom(String),
}

/// 通知内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationContent {
    pub title: String,
    pub subtitle: String,
    pub body: String,
    /// 引用的分类标识符，必须已注册
    pub category_id: String,
    pub sound: Sound,
    /// 展示时写入应用角标的值
    pub badge: u32,
}

impl NotificationContent {
    /// 叫醒闹钟的固定文案内容
    pub fn wake_alarm(sound: Sound, badge: u32) -> Self {
        Self {
            title: ALARM_TITLE.to_string(),
            subtitle: ALARM_SUBTITLE.to_string(),
            body: ALARM_BODY.to_string(),
            category_id: TIMER_EXPIRED_CATEGORY.to_string(),
            sound,
            badge,
        }
    }
}

/// 可提交给主管机构的调度请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    /// 请求标识符；同标识符的待决请求会被替换
    pub identifier: String,
    pub content: NotificationContent,
    pub trigger: FireTime,
}
