//! 响应路由集成测试 - 通过公开 API 验证路由表和角标回调

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use wake_notify::{
    AuthorizationOptions, BadgeTracker, NotificationAuthority, NotificationCategory,
    NotificationContent, NotificationRequest, NotificationResponse, ResponseRouter, RouteOutcome,
    SchedulingError, Sound, SNOOZE_ACTION, STOP_ACTION, SYSTEM_DEFAULT_ACTION,
    SYSTEM_DISMISS_ACTION, TIMER_EXPIRED_CATEGORY,
};

fn response(category: &str, action: &str) -> NotificationResponse {
    NotificationResponse {
        category_id: category.to_string(),
        action_id: action.to_string(),
        content: NotificationContent::wake_alarm(Sound::Default, 2),
    }
}

#[test]
fn test_routing_table_through_public_api() {
    let router = ResponseRouter::new();

    assert_eq!(
        router.dispatch(&response(TIMER_EXPIRED_CATEGORY, SNOOZE_ACTION)),
        RouteOutcome::Snoozed
    );
    assert_eq!(
        router.dispatch(&response(TIMER_EXPIRED_CATEGORY, STOP_ACTION)),
        RouteOutcome::Stopped
    );
    assert_eq!(
        router.dispatch(&response("GENERAL_CATEGORY", SYSTEM_DISMISS_ACTION)),
        RouteOutcome::Dismissed
    );
    assert_eq!(
        router.dispatch(&response("GENERAL_CATEGORY", SYSTEM_DEFAULT_ACTION)),
        RouteOutcome::Launched
    );
    assert_eq!(
        router.dispatch(&response("SOMETHING_ELSE", "CUSTOM")),
        RouteOutcome::Unhandled
    );
}

#[test]
fn test_custom_snooze_handler_sees_response_content() {
    let seen_badge = Arc::new(AtomicUsize::new(0));
    let router = ResponseRouter::new().on_snooze({
        let seen_badge = seen_badge.clone();
        move |r| {
            seen_badge.store(r.content.badge as usize, Ordering::SeqCst);
        }
    });

    router.dispatch(&response(TIMER_EXPIRED_CATEGORY, SNOOZE_ACTION));
    assert_eq!(seen_badge.load(Ordering::SeqCst), 2);
}

/// 记录角标推送的 mock 主管机构
#[derive(Default)]
struct BadgeOnlyAuthority {
    pushed: std::sync::Mutex<Vec<u32>>,
}

#[async_trait]
impl NotificationAuthority for BadgeOnlyAuthority {
    fn name(&self) -> &str {
        "badge-only"
    }

    async fn request_authorization(&self, _options: AuthorizationOptions) -> anyhow::Result<bool> {
        Ok(true)
    }

    fn set_categories(&self, _categories: &[NotificationCategory]) {}

    async fn add(&self, _request: &NotificationRequest) -> Result<(), SchedulingError> {
        Ok(())
    }

    fn set_badge(&self, value: u32) {
        self.pushed.lock().unwrap().push(value);
    }
}

#[test]
fn test_foreground_presentation_updates_badge_display() {
    let authority = BadgeOnlyAuthority::default();
    let tracker = BadgeTracker::new();

    // 展示内容带角标值：覆盖计数并推送
    let content = NotificationContent::wake_alarm(Sound::Default, 4);
    tracker.set_from_presented(Some(content.badge), &authority);
    assert_eq!(tracker.current(), 4);

    // 不带角标值：计数不变，仍然推送当前值
    tracker.set_from_presented(None, &authority);
    assert_eq!(tracker.current(), 4);

    assert_eq!(*authority.pushed.lock().unwrap(), vec![4, 4]);
}
