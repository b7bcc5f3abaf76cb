//! 调度器 - 将构建好的请求提交给通知主管机构

use std::sync::Arc;

use tracing::{info, warn};

use super::authority::{NotificationAuthority, SchedulingError};
use super::content::NotificationRequest;

/// 调度器
///
/// 提交是异步边界，完成可能落在任意执行上下文。失败记录日志并
/// 作为结果值上抛，不做自动重试；并发提交之间不做互斥，依赖
/// 固定标识符的替换语义保证重复调用幂等。
pub struct Scheduler {
    authority: Arc<dyn NotificationAuthority>,
    /// 是否为 dry-run 模式
    dry_run: bool,
}

impl Scheduler {
    /// 创建调度器
    pub fn new(authority: Arc<dyn NotificationAuthority>) -> Self {
        Self {
            authority,
            dry_run: false,
        }
    }

    /// 设置 dry-run 模式
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// 提交调度请求
    pub async fn submit(&self, request: &NotificationRequest) -> Result<(), SchedulingError> {
        if self.dry_run {
            eprintln!(
                "[DRY-RUN] Would schedule request {} at {}",
                request.identifier, request.trigger
            );
            return Ok(());
        }

        match self.authority.add(request).await {
            Ok(()) => {
                info!(
                    authority = self.authority.name(),
                    identifier = %request.identifier,
                    trigger = %request.trigger,
                    "Notification scheduled"
                );
                Ok(())
            }
            Err(e) => {
                warn!(
                    authority = self.authority.name(),
                    error = %e,
                    "Authority rejected notification request"
                );
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::authority::AuthorizationOptions;
    use crate::notification::category::NotificationCategory;
    use crate::notification::content::{NotificationContent, Sound};
    use crate::notification::time_resolver::FireTime;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// 统计提交次数、可配置失败的 mock 主管机构
    struct MockAuthority {
        add_count: AtomicUsize,
        fail_with: Option<String>,
    }

    impl MockAuthority {
        fn new() -> Self {
            Self {
                add_count: AtomicUsize::new(0),
                fail_with: None,
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                add_count: AtomicUsize::new(0),
                fail_with: Some(message.to_string()),
            }
        }
    }

    #[async_trait]
    impl NotificationAuthority for MockAuthority {
        fn name(&self) -> &str {
            "mock"
        }

        async fn request_authorization(
            &self,
            _options: AuthorizationOptions,
        ) -> anyhow::Result<bool> {
            Ok(true)
        }

        fn set_categories(&self, _categories: &[NotificationCategory]) {}

        async fn add(&self, _request: &NotificationRequest) -> Result<(), SchedulingError> {
            self.add_count.fetch_add(1, Ordering::SeqCst);
            match &self.fail_with {
                Some(message) => Err(SchedulingError::new(message.clone())),
                None => Ok(()),
            }
        }

        fn set_badge(&self, _value: u32) {}
    }

    fn sample_request() -> NotificationRequest {
        NotificationRequest {
            identifier: "morning-alarm".to_string(),
            content: NotificationContent::wake_alarm(Sound::Default, 1),
            trigger: FireTime::once(8, 45),
        }
    }

    #[tokio::test]
    async fn test_submit_delegates_to_authority() {
        let authority = Arc::new(MockAuthority::new());
        let scheduler = Scheduler::new(authority.clone());

        scheduler.submit(&sample_request()).await.unwrap();
        assert_eq!(authority.add_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_submit_surfaces_authority_diagnostic() {
        let authority = Arc::new(MockAuthority::failing("disk full"));
        let scheduler = Scheduler::new(authority.clone());

        let err = scheduler.submit(&sample_request()).await.unwrap_err();
        assert_eq!(err.message(), "disk full");
        // 不做自动重试
        assert_eq!(authority.add_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_dry_run_skips_authority() {
        let authority = Arc::new(MockAuthority::new());
        let scheduler = Scheduler::new(authority.clone()).with_dry_run(true);

        scheduler.submit(&sample_request()).await.unwrap();
        assert_eq!(authority.add_count.load(Ordering::SeqCst), 0);
    }
}
