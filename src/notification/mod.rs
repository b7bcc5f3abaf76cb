//! 通知核心 - 时间解析、分类注册、请求构建、调度提交与响应路由
//!
//! # 设计目标
//! 1. 统一边界：主管机构通过 `NotificationAuthority` trait 抽象
//! 2. 单向流程：TimeResolver → RequestBuilder → Scheduler
//! 3. 路由无状态：ResponseRouter 按响应逐条分发，兜底分支显式存在
//! 4. 角标单一写入者：计数只经 `BadgeTracker` 修改
//!
//! # 使用示例
//! ```ignore
//! use wake_notify::notification::{
//!     BadgeTracker, CategoryRegistry, RequestBuilder, Scheduler, TimeResolver,
//! };
//!
//! let registry = CategoryRegistry::with_default_set();
//! let fire = TimeResolver::default().resolve(Some("10"), None);
//! let badge = BadgeTracker::new();
//! let request = RequestBuilder::new(&registry).build(fire, &badge)?;
//! badge.increment();
//! Scheduler::new(authority).submit(&request).await?;
//! ```

pub mod authorities;
pub mod authority;
pub mod badge;
pub mod builder;
pub mod category;
pub mod content;
pub mod router;
pub mod scheduler;
pub mod time_resolver;

pub use authorities::{FileAuthority, LogAuthority, PendingRecord};
pub use authority::{
    AuthorizationOptions, NotificationAuthority, NotificationResponse, SchedulingError,
};
pub use badge::BadgeTracker;
pub use builder::RequestBuilder;
pub use category::{
    default_categories, ActivationMode, CategoryRegistry, DismissBehavior, NotificationAction,
    NotificationCategory, GENERAL_CATEGORY, SNOOZE_ACTION, STOP_ACTION, SYSTEM_DEFAULT_ACTION,
    SYSTEM_DISMISS_ACTION, TIMER_EXPIRED_CATEGORY,
};
pub use content::{NotificationContent, NotificationRequest, Sound, ALARM_REQUEST_ID};
pub use router::{ResponseHandler, ResponseRouter, RouteOutcome};
pub use scheduler::Scheduler;
pub use time_resolver::{FireTime, TimeResolver, DEFAULT_MINUTE_OFFSET};
