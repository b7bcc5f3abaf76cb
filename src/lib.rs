//! Wake Notify - 调度和路由本地交互式叫醒通知

pub mod cli;
pub mod config;
pub mod notification;

pub use config::{AuthorityKind, WakeConfig};
pub use notification::{
    default_categories, ActivationMode, AuthorizationOptions, BadgeTracker, CategoryRegistry,
    DismissBehavior, FileAuthority, FireTime, LogAuthority, NotificationAction,
    NotificationAuthority, NotificationCategory, NotificationContent, NotificationRequest,
    NotificationResponse, PendingRecord, RequestBuilder, ResponseRouter, RouteOutcome,
    SchedulingError, Scheduler, Sound, TimeResolver,
};
pub use notification::{
    ALARM_REQUEST_ID, DEFAULT_MINUTE_OFFSET, GENERAL_CATEGORY, SNOOZE_ACTION, STOP_ACTION,
    SYSTEM_DEFAULT_ACTION, SYSTEM_DISMISS_ACTION, TIMER_EXPIRED_CATEGORY,
};
