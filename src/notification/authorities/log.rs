//! 日志后端 - 开发用，把所有操作写入 tracing 日志

use async_trait::async_trait;
use tracing::info;

use crate::notification::authority::{
    AuthorizationOptions, NotificationAuthority, SchedulingError,
};
use crate::notification::category::NotificationCategory;
use crate::notification::content::NotificationRequest;

/// 日志后端 - 不持久化任何状态，授权总是允许
pub struct LogAuthority;

impl LogAuthority {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogAuthority {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationAuthority for LogAuthority {
    fn name(&self) -> &str {
        "log"
    }

    async fn request_authorization(&self, options: AuthorizationOptions) -> anyhow::Result<bool> {
        info!(
            badge = options.badge,
            alert = options.alert,
            sound = options.sound,
            "Authorization granted"
        );
        Ok(true)
    }

    fn set_categories(&self, categories: &[NotificationCategory]) {
        let ids: Vec<&str> = categories.iter().map(|c| c.id.as_str()).collect();
        info!(count = categories.len(), ids = ?ids, "Notification categories set");
    }

    async fn add(&self, request: &NotificationRequest) -> Result<(), SchedulingError> {
        info!(
            identifier = %request.identifier,
            category = %request.content.category_id,
            trigger = %request.trigger,
            badge = request.content.badge,
            "Request accepted"
        );
        Ok(())
    }

    fn set_badge(&self, value: u32) {
        info!(badge = value, "Badge display updated");
    }
}
