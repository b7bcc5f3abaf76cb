//! 通知分类注册表 - 定义通知分类及其交互动作
//!
//! 分类集合在进程启动时注册一次，之后按标识符引用。
//! 重新注册是整组替换，不与已注册集合合并。

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// 通用分类：没有自定义动作，关闭需要用户显式操作
pub const GENERAL_CATEGORY: &str = "GENERAL_CATEGORY";
/// 计时结束分类：携带 snooze / stop 两个动作
pub const TIMER_EXPIRED_CATEGORY: &str = "TIMER_EXPIRED";
/// 后台激活的贪睡动作
pub const SNOOZE_ACTION: &str = "SNOOZE_ACTION";
/// 前台激活的停止动作
pub const STOP_ACTION: &str = "STOP_ACTION";
/// 系统默认动作：用户未执行任何自定义动作直接关闭了通知
pub const SYSTEM_DISMISS_ACTION: &str = "SYSTEM_DISMISS_ACTION";
/// 系统默认动作：用户点击通知本体打开了应用
pub const SYSTEM_DEFAULT_ACTION: &str = "SYSTEM_DEFAULT_ACTION";

/// 动作被触发时应用的激活方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationMode {
    /// 在后台处理，不拉起应用
    Background,
    /// 拉起应用到前台
    Foreground,
}

/// 通知关闭策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissBehavior {
    /// 系统默认关闭行为
    Default,
    /// 关闭需要用户显式操作，且会产生关闭回调
    Custom,
}

/// 通知动作
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationAction {
    /// 动作标识符（分类内唯一）
    pub id: String,
    /// 展示给用户的标题
    pub title: String,
    /// 激活方式
    pub activation: ActivationMode,
}

impl NotificationAction {
    /// 创建动作
    pub fn new(id: impl Into<String>, title: impl Into<String>, activation: ActivationMode) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            activation,
        }
    }
}

/// 通知分类：一组可附加到通知内容上的交互动作
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationCategory {
    /// 分类标识符（注册表内唯一）
    pub id: String,
    /// 有序的动作列表
    pub actions: Vec<NotificationAction>,
    /// 关闭策略
    pub dismiss_behavior: DismissBehavior,
}

impl NotificationCategory {
    /// 创建分类
    pub fn new(
        id: impl Into<String>,
        actions: Vec<NotificationAction>,
        dismiss_behavior: DismissBehavior,
    ) -> Self {
        Self {
            id: id.into(),
            actions,
            dismiss_behavior,
        }
    }

    /// 按标识符查找动作
    pub fn action(&self, id: &str) -> Option<&NotificationAction> {
        self.actions.iter().find(|a| a.id == id)
    }
}

/// 本系统使用的固定分类集合
pub fn default_categories() -> Vec<NotificationCategory> {
    vec![
        NotificationCategory::new(GENERAL_CATEGORY, Vec::new(), DismissBehavior::Custom),
        NotificationCategory::new(
            TIMER_EXPIRED_CATEGORY,
            vec![
                NotificationAction::new(SNOOZE_ACTION, "Snooze", ActivationMode::Background),
                NotificationAction::new(STOP_ACTION, "Stop", ActivationMode::Foreground),
            ],
            DismissBehavior::Default,
        ),
    ]
}

/// 分类注册表
///
/// 进程启动时注册一次，生命周期内只读；重新注册替换整个集合。
#[derive(Debug, Default)]
pub struct CategoryRegistry {
    categories: Vec<NotificationCategory>,
}

impl CategoryRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建并注册固定分类集合
    pub fn with_default_set() -> Self {
        let mut registry = Self::new();
        registry.register(default_categories());
        registry
    }

    /// 注册分类集合：整组替换已注册的集合
    pub fn register(&mut self, categories: Vec<NotificationCategory>) {
        let mut seen = HashSet::new();
        for category in &categories {
            if !seen.insert(category.id.as_str()) {
                warn!(category = %category.id, "Duplicate category id in registration set");
            }
        }

        info!(count = categories.len(), "Registering notification categories");
        self.categories = categories;
    }

    /// 按标识符查找分类
    pub fn lookup(&self, id: &str) -> Option<&NotificationCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// 标识符是否已注册
    pub fn contains(&self, id: &str) -> bool {
        self.lookup(id).is_some()
    }

    /// 已注册的分类集合（保持注册顺序）
    pub fn categories(&self) -> &[NotificationCategory] {
        &self.categories
    }
}
